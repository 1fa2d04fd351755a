//! Counter slice: a single number nudged up and down.

use crate::app::action::Action;
use crate::store::Reducer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increase,
    Decrease,
    IncreaseBy(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn new(initial: i64) -> Self {
        Self { count: initial }
    }
}

impl Reducer<CounterAction> for CounterState {
    fn reduce(&mut self, action: &CounterAction) {
        self.count = match *action {
            CounterAction::Increase => self.count.saturating_add(1),
            CounterAction::Decrease => self.count.saturating_sub(1),
            CounterAction::IncreaseBy(diff) => self.count.saturating_add(diff),
        };
    }
}

impl Reducer<Action> for CounterState {
    fn reduce(&mut self, action: &Action) {
        if let Action::Counter(action) = action {
            Reducer::<CounterAction>::reduce(self, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_decrease() {
        let mut state = CounterState::default();
        state.reduce(&CounterAction::Increase);
        state.reduce(&CounterAction::Increase);
        state.reduce(&CounterAction::Decrease);
        assert_eq!(state.count, 1);
    }

    #[test]
    fn test_increase_by_accepts_negative_and_saturates() {
        let mut state = CounterState::new(10);
        state.reduce(&CounterAction::IncreaseBy(-15));
        assert_eq!(state.count, -5);

        let mut state = CounterState::new(i64::MAX);
        state.reduce(&CounterAction::Increase);
        assert_eq!(state.count, i64::MAX);
    }

    #[test]
    fn test_ignores_other_app_actions() {
        let mut state = CounterState::new(3);
        state.reduce(&Action::Quit);
        assert_eq!(state.count, 3);
        state.reduce(&Action::Counter(CounterAction::IncreaseBy(2)));
        assert_eq!(state.count, 5);
    }
}
