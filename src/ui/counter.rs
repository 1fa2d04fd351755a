use crate::app::state::{AppState, FocusPanel};
use crate::modules::counter::CounterState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, counter: &CounterState) {
    let focused = state.focus == FocusPanel::Counter;
    let block = Block::default()
        .title(" Counter ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let step = state.config.counter.step;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            counter.count.to_string(),
            Theme::counter_value(counter.count),
        ))
        .centered(),
        Line::default(),
        hint_line("+ / k", "increase"),
        hint_line("- / j", "decrease"),
        hint_line("b", &format!("increase by {}", step)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn hint_line<'a>(keys: &'a str, what: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {:<6}", keys), Theme::key()),
        Span::styled(what.to_string(), Theme::hint()),
    ])
}
