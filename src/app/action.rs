use crate::modules::counter::CounterAction;
use crate::modules::github::{GithubAction, RateLimitAction};

/// Everything that can flow through the store, plus `Quit`, which the main
/// loop handles before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Counter(CounterAction),
    Github(GithubAction),
    RateLimit(RateLimitAction),
    Quit,
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        Action::Counter(action)
    }
}
