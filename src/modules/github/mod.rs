//! GitHub profile lookup: the async slice of the demo.

pub mod api;

use crate::app::action::Action;
use crate::store::{
    create_async_saga, create_async_thunk, AsyncAction, AsyncActionCreator, AsyncSaga,
    AsyncState, AsyncThunk, Reducer,
};

pub use api::{ApiError, GithubClient, GithubProfile, RateLimit};

pub type GithubAction = AsyncAction<String, GithubProfile, ApiError>;
pub type RateLimitAction = AsyncAction<(), RateLimit, ApiError>;

pub type UserProfileSaga = AsyncSaga<String, GithubProfile, ApiError, Action>;
pub type UserProfileThunk = AsyncThunk<String, GithubProfile, ApiError, Action>;
pub type RateLimitSaga = AsyncSaga<(), RateLimit, ApiError, Action>;
pub type RateLimitThunk = AsyncThunk<(), RateLimit, ApiError, Action>;

fn unwrap_github(action: &Action) -> Option<&GithubAction> {
    match action {
        Action::Github(inner) => Some(inner),
        _ => None,
    }
}

fn unwrap_rate_limit(action: &Action) -> Option<&RateLimitAction> {
    match action {
        Action::RateLimit(inner) => Some(inner),
        _ => None,
    }
}

pub const GET_USER_PROFILE: AsyncActionCreator<String, GithubProfile, ApiError, Action> =
    AsyncActionCreator::new("github/GET_USER_PROFILE", Action::Github, unwrap_github);

pub const GET_RATE_LIMIT: AsyncActionCreator<(), RateLimit, ApiError, Action> =
    AsyncActionCreator::new("github/GET_RATE_LIMIT", Action::RateLimit, unwrap_rate_limit);

pub fn user_profile_saga(client: GithubClient) -> UserProfileSaga {
    create_async_saga(GET_USER_PROFILE, move |username: String| {
        let client = client.clone();
        async move { client.get_user_profile(username).await }
    })
}

pub fn user_profile_thunk(client: GithubClient) -> UserProfileThunk {
    create_async_thunk(GET_USER_PROFILE, move |username: String| {
        let client = client.clone();
        async move { client.get_user_profile(username).await }
    })
}

pub fn rate_limit_saga(client: GithubClient) -> RateLimitSaga {
    AsyncSaga::without_input(GET_RATE_LIMIT, move || {
        let client = client.clone();
        async move { client.get_rate_limit().await }
    })
}

pub fn rate_limit_thunk(client: GithubClient) -> RateLimitThunk {
    AsyncThunk::without_input(GET_RATE_LIMIT, move || {
        let client = client.clone();
        async move { client.get_rate_limit().await }
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubState {
    pub user_profile: AsyncState<GithubProfile, ApiError>,
    /// Username of the most recent request, for the profile card header.
    pub last_query: Option<String>,
    pub rate_limit: AsyncState<RateLimit, ApiError>,
}

impl Reducer<Action> for GithubState {
    fn reduce(&mut self, action: &Action) {
        if let Some(action) = GET_USER_PROFILE.match_any(action) {
            tracing::debug!(phase = action.phase(), "user profile");
            match action {
                AsyncAction::Request(username) => self.last_query = Some(username.clone()),
                AsyncAction::Failure(error) => tracing::warn!(%error, "user profile lookup failed"),
                AsyncAction::Success(_) => {}
            }
            self.user_profile.apply(action);
        } else if let Some(action) = GET_RATE_LIMIT.match_any(action) {
            if let AsyncAction::Failure(error) = action {
                tracing::warn!(%error, "rate limit lookup failed");
            }
            self.rate_limit.apply(action);
        }
    }
}
