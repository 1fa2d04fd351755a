//! Async action creators: the caller starts the operation directly instead of
//! dispatching a request for a saga to pick up.

use super::action::AsyncActionCreator;
use super::saga::Operation;
use super::Dispatcher;
use futures::FutureExt;
use std::fmt::Debug;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;

/// Dispatches the request action, runs the operation once, then dispatches
/// exactly one of success or failure.
pub struct AsyncThunk<I, O, E, A> {
    creator: AsyncActionCreator<I, O, E, A>,
    operation: Operation<I, O, E>,
}

impl<I, O, E, A> AsyncThunk<I, O, E, A>
where
    I: Clone + Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    A: Debug + Send + 'static,
{
    pub fn new<F, Fut>(creator: AsyncActionCreator<I, O, E, A>, op: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        Self {
            creator,
            operation: Operation::with_input(op),
        }
    }

    /// The request is queued before this returns; the terminal action
    /// follows when the returned task finishes. Returns `None` without
    /// running the operation if the action channel is already closed.
    pub fn dispatch(&self, input: I, dispatcher: &Dispatcher<A>) -> Option<JoinHandle<()>> {
        let creator = self.creator;
        if !dispatcher.dispatch(creator.request(input.clone())) {
            tracing::debug!(thunk = creator.name(), "action channel closed, request dropped");
            return None;
        }
        let operation = self.operation.clone();
        let dispatcher = dispatcher.clone();
        Some(tokio::spawn(async move {
            let call = async move { operation.invoke(input).await };
            let result = match AssertUnwindSafe(call).catch_unwind().await {
                Ok(result) => result,
                Err(_) => {
                    tracing::error!(thunk = creator.name(), "operation panicked, no terminal action sent");
                    return;
                }
            };
            let outcome = match result {
                Ok(output) => creator.success(output),
                Err(error) => creator.failure(error),
            };
            tracing::info!(thunk = creator.name(), ?outcome, "async thunk settled");
            if !dispatcher.dispatch(outcome) {
                tracing::debug!(thunk = creator.name(), "action channel closed, result dropped");
            }
        }))
    }
}

impl<O, E, A> AsyncThunk<(), O, E, A>
where
    O: Send + 'static,
    E: Send + 'static,
    A: Debug + Send + 'static,
{
    pub fn without_input<F, Fut>(creator: AsyncActionCreator<(), O, E, A>, op: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        Self {
            creator,
            operation: Operation::without_input(op),
        }
    }
}

/// Shorthand for [`AsyncThunk::new`].
pub fn create_async_thunk<I, O, E, A, F, Fut>(
    creator: AsyncActionCreator<I, O, E, A>,
    op: F,
) -> AsyncThunk<I, O, E, A>
where
    I: Clone + Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    A: Debug + Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
{
    AsyncThunk::new(creator, op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AsyncAction;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::mpsc::error::TryRecvError;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Lookup(AsyncAction<String, usize, String>),
        Health(AsyncAction<(), bool, String>),
    }

    fn unwrap_lookup(a: &TestAction) -> Option<&AsyncAction<String, usize, String>> {
        match a {
            TestAction::Lookup(inner) => Some(inner),
            _ => None,
        }
    }

    fn unwrap_health(a: &TestAction) -> Option<&AsyncAction<(), bool, String>> {
        match a {
            TestAction::Health(inner) => Some(inner),
            _ => None,
        }
    }

    const LOOKUP: AsyncActionCreator<String, usize, String, TestAction> =
        AsyncActionCreator::new("test/LOOKUP", TestAction::Lookup, unwrap_lookup);
    const HEALTH: AsyncActionCreator<(), bool, String, TestAction> =
        AsyncActionCreator::new("test/HEALTH", TestAction::Health, unwrap_health);

    #[tokio::test]
    async fn test_request_then_success() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let thunk = create_async_thunk(LOOKUP, |s: String| async move { Ok::<_, String>(s.len()) });

        thunk.dispatch("octocat".into(), &dispatcher).unwrap().await.unwrap();

        assert_eq!(rx.recv().await, Some(LOOKUP.request("octocat".into())));
        assert_eq!(rx.recv().await, Some(LOOKUP.success(7)));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_request_then_failure_without_input() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let thunk = AsyncThunk::without_input(HEALTH, || async {
            Err::<bool, _>("network down".to_string())
        });

        thunk.dispatch((), &dispatcher).unwrap().await.unwrap();

        assert_eq!(rx.recv().await, Some(HEALTH.request(())));
        assert_eq!(rx.recv().await, Some(HEALTH.failure("network down".into())));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_closed_channel_skips_operation() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let thunk = create_async_thunk(LOOKUP, move |s: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, String>(s.len()) }
        });

        assert!(thunk.dispatch("x".into(), &dispatcher).is_none());
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_panicking_operation_sends_only_the_request() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let thunk = AsyncThunk::without_input(HEALTH, || async {
            if true {
                panic!("health check blew up");
            }
            Ok::<bool, String>(true)
        });

        let handle = thunk.dispatch((), &dispatcher).unwrap();
        assert!(handle.await.is_ok());
        assert_eq!(rx.recv().await, Some(HEALTH.request(())));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }
}
