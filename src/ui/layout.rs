use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub counter: Rect,
    pub profile_form: Rect,
    pub profile_card: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    // Horizontal: counter | gap | profile lookup
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(main_chunks[0]);

    // Right column: form | card
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(h_chunks[1]);

    AppLayout {
        counter: h_chunks[0],
        profile_form: right_chunks[0],
        profile_card: right_chunks[1],
        status_bar: main_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.counter.width, 28);
        assert_eq!(layout.profile_form.height, 3);
        assert_eq!(layout.profile_card.y, 3);
        assert_eq!(layout.profile_card.bottom(), 29);
    }
}
