use crate::app::state::AppState;
use crate::modules::github::{GithubProfile, GithubState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, github: &GithubState) {
    let block = Block::default()
        .title(" Profile ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let profile = &github.user_profile;
    let query = github.last_query.as_deref().unwrap_or("");

    let mut lines: Vec<Line> = Vec::new();
    if profile.loading {
        let frame_idx = (state.tick_count % SPINNER.len() as u64) as usize;
        lines.push(Line::from(Span::styled(
            format!("{} Loading {}...", SPINNER[frame_idx], query),
            Theme::loading(),
        )));
        lines.push(Line::default());
    }

    if let Some(error) = &profile.error {
        lines.push(Line::from(Span::styled("An error occurred", Theme::error_message())));
        lines.push(Line::from(Span::styled(error.to_string(), Theme::hint())));
    } else if let Some(data) = &profile.data {
        lines.extend(profile_lines(data));
    } else if !profile.loading {
        lines.push(Line::from(Span::styled(
            "Search a GitHub user to see their profile.",
            Theme::hint(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Theme::label()),
        Span::raw(value),
    ])
}

fn profile_lines(p: &GithubProfile) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(p.display_name().to_string(), Theme::profile_name()),
            Span::styled(format!("  @{}", p.login), Theme::hint()),
        ]),
        Line::default(),
    ];
    if let Some(bio) = p.bio.as_deref().filter(|b| !b.is_empty()) {
        lines.push(Line::from(bio.to_string()));
        lines.push(Line::default());
    }

    let optional = [
        ("Company", &p.company),
        ("Location", &p.location),
        ("Blog", &p.blog),
    ];
    for (label, value) in optional {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(field(label, v.to_string()));
        }
    }
    lines.push(field("Repos", p.public_repos.to_string()));
    lines.push(field(
        "Followers",
        format!("{} · following {}", p.followers, p.following),
    ));
    lines.push(field("Joined", p.created_at.format("%Y-%m-%d").to_string()));
    lines.push(field("URL", p.html_url.clone()));
    lines.push(field("Avatar", p.avatar_url.clone()));
    lines
}
