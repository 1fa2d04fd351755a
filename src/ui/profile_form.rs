use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Profile;
    let block = Block::default()
        .title(" GitHub username ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = &state.input.text;
    let line = if text.is_empty() && !focused {
        Line::from(Span::styled("Tab to type a username, Enter to search", Theme::hint()))
    } else {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Theme::ACCENT)),
            Span::styled(text.as_str(), Theme::input_text()),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let x = cursor_x(inner, state.input.cursor_column());
        frame.set_cursor_position((x, inner.y));
    }
}

/// Cursor column after the prompt, clamped to the last cell of `inner`.
fn cursor_x(inner: Rect, column: usize) -> u16 {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(2)
        .saturating_add(column)
        .min(inner.right().saturating_sub(1))
}
