//! Routes submitted actions to the store, or to the matching thunk when the
//! app runs in thunk mode.

use crate::app::action::Action;
use crate::config::EffectsMode;
use crate::modules::github::{
    rate_limit_saga, rate_limit_thunk, user_profile_saga, user_profile_thunk, GithubClient,
    RateLimitThunk, UserProfileThunk, GET_RATE_LIMIT, GET_USER_PROFILE,
};
use crate::modules::RootState;
use crate::store::Store;

struct Thunks {
    user_profile: UserProfileThunk,
    rate_limit: RateLimitThunk,
}

pub struct EffectRunner {
    mode: EffectsMode,
    thunks: Option<Thunks>,
}

impl EffectRunner {
    /// Register the sagas the chosen mode needs on `store`.
    pub fn install(
        store: &mut Store<RootState, Action>,
        mode: EffectsMode,
        client: GithubClient,
    ) -> Self {
        let thunks = match mode {
            EffectsMode::Saga => {
                store.register_saga(user_profile_saga(client.clone()));
                store.register_saga(rate_limit_saga(client));
                None
            }
            EffectsMode::Thunk => Some(Thunks {
                user_profile: user_profile_thunk(client.clone()),
                rate_limit: rate_limit_thunk(client),
            }),
        };
        tracing::info!(
            mode = mode.label(),
            sagas = store.saga_count(),
            "effects installed"
        );
        Self { mode, thunks }
    }

    pub fn mode(&self) -> EffectsMode {
        self.mode
    }

    /// In thunk mode a request starts its thunk, which dispatches the request
    /// itself. Everything else goes straight to the store.
    pub fn submit(&self, store: &mut Store<RootState, Action>, action: Action) {
        if let Some(thunks) = &self.thunks {
            if let Some(username) = GET_USER_PROFILE.match_request(&action) {
                thunks
                    .user_profile
                    .dispatch(username.clone(), store.dispatcher());
                return;
            }
            if GET_RATE_LIMIT.match_request(&action).is_some() {
                thunks.rate_limit.dispatch((), store.dispatcher());
                return;
            }
        }
        store.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GithubConfig;
    use crate::modules::counter::CounterAction;
    use crate::modules::github::ApiError;
    use crate::store::Dispatcher;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn setup(mode: EffectsMode) -> (Store<RootState, Action>, EffectRunner, UnboundedReceiver<Action>) {
        let (dispatcher, rx) = Dispatcher::channel();
        let mut store = Store::new(RootState::default(), dispatcher);
        let client = GithubClient::new(&GithubConfig::default()).unwrap();
        let runner = EffectRunner::install(&mut store, mode, client);
        (store, runner, rx)
    }

    #[tokio::test]
    async fn test_saga_mode_reduces_request_then_receives_failure() {
        let (mut store, runner, mut rx) = setup(EffectsMode::Saga);
        assert_eq!(runner.mode(), EffectsMode::Saga);
        assert_eq!(store.saga_count(), 2);

        runner.submit(&mut store, GET_USER_PROFILE.request("bad name".into()));
        assert!(store.state().github.user_profile.loading);

        let settled = rx.recv().await.unwrap();
        assert_eq!(
            settled,
            GET_USER_PROFILE.failure(ApiError::InvalidUsername("bad name".into()))
        );
        store.dispatch(settled);
        assert!(!store.state().github.user_profile.loading);
        assert!(store.state().github.user_profile.error.is_some());
    }

    #[tokio::test]
    async fn test_thunk_mode_dispatches_request_through_channel() {
        let (mut store, runner, mut rx) = setup(EffectsMode::Thunk);
        assert_eq!(store.saga_count(), 0);

        runner.submit(&mut store, GET_USER_PROFILE.request("bad name".into()));
        assert!(!store.state().github.user_profile.loading);

        assert_eq!(rx.recv().await, Some(GET_USER_PROFILE.request("bad name".into())));
        assert_eq!(
            rx.recv().await,
            Some(GET_USER_PROFILE.failure(ApiError::InvalidUsername("bad name".into())))
        );
    }

    #[tokio::test]
    async fn test_counter_actions_go_straight_to_store() {
        let (mut store, runner, _rx) = setup(EffectsMode::Thunk);
        runner.submit(&mut store, Action::Counter(CounterAction::IncreaseBy(3)));
        assert_eq!(store.state().counter.count, 3);
    }
}
