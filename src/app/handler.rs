use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::modules::counter::CounterAction;
use crate::modules::github::{GET_RATE_LIMIT, GET_USER_PROFILE};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Update view state for `event` and return the actions it produces.
///
/// `loading` tells the tick handler whether a spinner is on screen.
pub fn handle_event(state: &mut AppState, event: AppEvent, loading: bool) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if loading {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        return vec![GET_RATE_LIMIT.request(())];
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = state.focus.next();
            return vec![];
        }
        KeyCode::Esc => {
            if state.focus == FocusPanel::Profile && !state.input.text.is_empty() {
                state.input.clear();
                return vec![];
            }
            return vec![Action::Quit];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Counter => handle_counter_key(state, key),
        FocusPanel::Profile => handle_profile_key(state, key),
    }
}

fn handle_counter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let action = match key.code {
        KeyCode::Char('+') | KeyCode::Char('k') | KeyCode::Up => CounterAction::Increase,
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => CounterAction::Decrease,
        KeyCode::Char('b') => CounterAction::IncreaseBy(state.config.counter.step),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => return vec![],
    };
    vec![action.into()]
}

fn handle_profile_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        return submit_profile(state);
    }

    let input = &mut state.input;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => input.delete_word_back(),
            KeyCode::Char('u') => input.clear(),
            KeyCode::Char('a') => input.move_home(),
            KeyCode::Char('e') => input.move_end(),
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Up => input.history_up(),
        KeyCode::Down => input.history_down(),
        _ => {}
    }
    vec![]
}

fn submit_profile(state: &mut AppState) -> Vec<Action> {
    let username = state.input.submit();
    if username.is_empty() {
        state.set_status("Enter a GitHub username first");
        return vec![];
    }
    state.status_message = None;
    vec![GET_USER_PROFILE.request(username)]
}
