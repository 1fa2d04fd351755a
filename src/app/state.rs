use crate::config::AppConfig;
use unicode_width::UnicodeWidthStr;

/// Single-line text field with cursor editing and submit history.
///
/// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Take the trimmed text for submission, recording it in history.
    pub fn submit(&mut self) -> String {
        let value = self.text.trim().to_string();
        self.clear();
        if !value.is_empty() && self.history.last() != Some(&value) {
            self.history.push(value.clone());
        }
        value
    }

    fn recall(&mut self, idx: Option<usize>) {
        self.history_index = idx;
        self.text = idx.map(|i| self.history[i].clone()).unwrap_or_default();
        self.cursor = self.text.len();
    }

    pub fn history_up(&mut self) {
        let idx = match self.history_index {
            _ if self.history.is_empty() => return,
            Some(0) => return,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.recall(Some(idx));
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.recall(Some(i + 1)),
            Some(_) => self.recall(None),
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Counter,
    Profile,
}

impl FocusPanel {
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Counter => FocusPanel::Profile,
            FocusPanel::Profile => FocusPanel::Counter,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusPanel::Counter => "COUNTER",
            FocusPanel::Profile => "PROFILE",
        }
    }
}

/// View-side state. Domain state lives in the store.
pub struct AppState {
    pub config: AppConfig,
    pub focus: FocusPanel,
    pub input: InputState,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            focus: FocusPanel::Counter,
            input: InputState::new(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputState {
        let mut input = InputState::new();
        s.chars().for_each(|c| input.insert_char(c));
        input
    }

    #[test]
    fn test_editing_respects_char_boundaries() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hllo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "llo");
        input.move_end();
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let input = typed("日本");
        assert_eq!(input.cursor, 6);
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_submit_trims_and_records_history() {
        let mut input = typed("  octocat ");
        assert_eq!(input.submit(), "octocat");
        assert!(input.text.is_empty());

        input.insert_char('x');
        input.submit();
        assert_eq!(input.history, vec!["octocat", "x"]);

        assert_eq!(input.submit(), "");
        assert_eq!(input.history.len(), 2);
    }

    #[test]
    fn test_history_navigation() {
        let mut input = InputState::new();
        input.history_up();
        assert!(input.text.is_empty());

        input.history = vec!["a".into(), "b".into()];
        input.history_up();
        assert_eq!(input.text, "b");
        input.history_up();
        assert_eq!(input.text, "a");
        input.history_up();
        assert_eq!(input.text, "a");
        input.history_down();
        assert_eq!(input.text, "b");
        input.history_down();
        assert_eq!(input.text, "");
        assert_eq!(input.history_index, None);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = typed("foo bar  ");
        input.delete_word_back();
        assert_eq!(input.text, "foo ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }
}
