use crate::app::state::AppState;
use crate::modules::github::GithubState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const DEFAULT_STATUS: &str = "Tab switch panel · Ctrl-R refresh quota · Esc quit";

fn quota_label(github: &GithubState) -> String {
    let quota = &github.rate_limit;
    match (&quota.data, &quota.error) {
        _ if quota.loading => "API …".to_string(),
        (Some(rate), _) => format!(
            "API {}/{} until {}",
            rate.remaining,
            rate.limit,
            rate.reset.with_timezone(&Local).format("%H:%M")
        ),
        (None, Some(_)) => "API ?".to_string(),
        (None, None) => "API -".to_string(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, github: &GithubState) {
    let mut parts: Vec<Span> = Vec::new();

    let mode = state.config.effects.mode.label().to_uppercase();
    parts.push(Span::styled(
        format!(" [{}] ", mode),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    let status = state.status_message.as_deref().unwrap_or(DEFAULT_STATUS);
    parts.push(Span::styled(format!(" {} ", status), Theme::status_bar()));

    parts.push(Span::styled(
        format!(" {} ", quota_label(github)),
        Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    ));

    // Pad to fill remaining space
    let focus_name = state.focus.label();
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::github::{ApiError, RateLimit};
    use crate::store::AsyncState;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_quota_label_states() {
        let mut github = GithubState::default();
        assert_eq!(quota_label(&github), "API -");

        github.rate_limit = AsyncState::load(None);
        assert_eq!(quota_label(&github), "API …");

        github.rate_limit = AsyncState::error(ApiError::Request("offline".into()));
        assert_eq!(quota_label(&github), "API ?");

        github.rate_limit = AsyncState::success(RateLimit {
            limit: 60,
            remaining: 42,
            reset: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        });
        assert!(quota_label(&github).starts_with("API 42/60 until "));
    }
}
