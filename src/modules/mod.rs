//! Feature slices and the root state they compose into.

pub mod counter;
pub mod github;

use crate::app::action::Action;
use crate::config::AppConfig;
use crate::store::Reducer;
use counter::CounterState;
use github::GithubState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub counter: CounterState,
    pub github: GithubState,
}

impl RootState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            counter: CounterState::new(config.counter.initial),
            github: GithubState::default(),
        }
    }
}

impl Reducer<Action> for RootState {
    fn reduce(&mut self, action: &Action) {
        Reducer::<Action>::reduce(&mut self.counter, action);
        self.github.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::counter::CounterAction;
    use crate::modules::github::{ApiError, GET_USER_PROFILE};

    #[test]
    fn test_root_reducer_routes_to_slices() {
        let mut config = AppConfig::default();
        config.counter.initial = 5;
        let mut state = RootState::new(&config);

        state.reduce(&Action::Counter(CounterAction::Decrease));
        state.reduce(&GET_USER_PROFILE.request("octocat".into()));

        assert_eq!(state.counter.count, 4);
        assert!(state.github.user_profile.loading);

        state.reduce(&GET_USER_PROFILE.failure(ApiError::Request("network down".into())));
        assert_eq!(state.counter.count, 4);
        assert!(!state.github.user_profile.loading);
    }
}
