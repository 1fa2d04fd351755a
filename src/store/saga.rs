//! Saga-style side-effect handlers.
//!
//! A saga watches dispatched actions and, for each one it cares about, returns
//! a task that eventually yields exactly one follow-up action. The
//! [`SagaMiddleware`] spawns those tasks and feeds their output back through
//! the [`Dispatcher`].

use super::action::AsyncActionCreator;
use super::Dispatcher;
use futures::future::{BoxFuture, FutureExt};
use std::fmt::Debug;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

type WithInputFn<I, O, E> = dyn Fn(I) -> BoxFuture<'static, Result<O, E>> + Send + Sync;
type WithoutInputFn<O, E> = dyn Fn() -> BoxFuture<'static, Result<O, E>> + Send + Sync;

/// An async operation, tagged with its arity at construction time.
///
/// `WithoutInput` is only ever built for `I = ()`, so the request input it
/// receives in [`Operation::invoke`] carries no information.
pub(crate) enum Operation<I, O, E> {
    WithInput(Arc<WithInputFn<I, O, E>>),
    WithoutInput(Arc<WithoutInputFn<O, E>>),
}

impl<I, O, E> Operation<I, O, E> {
    pub(crate) fn with_input<F, Fut>(op: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        Operation::WithInput(Arc::new(move |input| op(input).boxed()))
    }

    pub(crate) fn arity(&self) -> usize {
        match self {
            Operation::WithInput(_) => 1,
            Operation::WithoutInput(_) => 0,
        }
    }

    pub(crate) fn invoke(&self, input: I) -> BoxFuture<'static, Result<O, E>> {
        match self {
            Operation::WithInput(op) => op(input),
            Operation::WithoutInput(op) => op(),
        }
    }
}

impl<O, E> Operation<(), O, E> {
    pub(crate) fn without_input<F, Fut>(op: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        Operation::WithoutInput(Arc::new(move || op().boxed()))
    }
}

impl<I, O, E> Clone for Operation<I, O, E> {
    fn clone(&self) -> Self {
        match self {
            Operation::WithInput(op) => Operation::WithInput(Arc::clone(op)),
            Operation::WithoutInput(op) => Operation::WithoutInput(Arc::clone(op)),
        }
    }
}

/// Watches dispatched actions and returns a task for the ones it handles.
pub trait Saga<A>: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the task to run for `action`, or `None` to ignore it.
    fn take(&self, action: &A) -> Option<BoxFuture<'static, A>>;
}

/// Call-then-put adapter for one async action triple.
///
/// On every request it invokes the operation once, waits for it, and resolves
/// to the success action carrying the result or the failure action carrying
/// the error. The error never escapes the task, and nothing is retried or
/// cached.
pub struct AsyncSaga<I, O, E, A> {
    creator: AsyncActionCreator<I, O, E, A>,
    operation: Operation<I, O, E>,
}

impl<I, O, E, A> AsyncSaga<I, O, E, A>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Adapter for an operation that takes the request payload as input.
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

    /// Run the operation for one request and resolve to the terminal action.
    pub fn execute(&self, input: I) -> BoxFuture<'static, A> {
        let creator = self.creator;
        let operation = self.operation.clone();
        async move {
            match operation.invoke(input).await {
                Ok(output) => creator.success(output),
                Err(error) => creator.failure(error),
            }
        }
        .boxed()
    }
}

impl<O, E, A> AsyncSaga<(), O, E, A>
where
    O: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    /// Adapter for an operation that takes no input; its request carries `()`.
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

/// Shorthand for [`AsyncSaga::new`].
pub fn create_async_saga<I, O, E, A, F, Fut>(
    creator: AsyncActionCreator<I, O, E, A>,
    op: F,
) -> AsyncSaga<I, O, E, A>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
{
    AsyncSaga::new(creator, op)
}

impl<I, O, E, A> Saga<A> for AsyncSaga<I, O, E, A>
where
    I: Clone + Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    fn name(&self) -> &'static str {
        self.creator.name()
    }

    fn take(&self, action: &A) -> Option<BoxFuture<'static, A>> {
        let input = self.creator.match_request(action)?.clone();
        tracing::info!(
            saga = self.creator.name(),
            arity = self.operation.arity(),
            "starting async saga"
        );
        Some(self.execute(input))
    }
}

/// Runs every registered saga against each dispatched action (take-every).
///
/// Tasks are detached: concurrent requests are neither deduplicated nor
/// ordered, and there is no way to cancel one once spawned. The one-terminal
/// action guarantee covers operations that return; an operation that panics
/// sends nothing and is logged at error level.
pub struct SagaMiddleware<A> {
    sagas: Vec<Box<dyn Saga<A>>>,
    dispatcher: Dispatcher<A>,
}

impl<A> SagaMiddleware<A>
where
    A: Debug + Send + 'static,
{
    pub fn new(dispatcher: Dispatcher<A>) -> Self {
        Self {
            sagas: Vec::new(),
            dispatcher,
        }
    }

    pub fn register(&mut self, saga: impl Saga<A> + 'static) {
        tracing::debug!(saga = saga.name(), "registered saga");
        self.sagas.push(Box::new(saga));
    }

    pub fn count(&self) -> usize {
        self.sagas.len()
    }

    /// Spawn a task for every saga that takes `action`. Returns how many.
    pub fn run(&self, action: &A) -> usize {
        let mut spawned = 0;
        for saga in &self.sagas {
            let Some(task) = saga.take(action) else {
                continue;
            };
            let name = saga.name();
            let dispatcher = self.dispatcher.clone();
            tokio::spawn(async move {
                let outcome = match AssertUnwindSafe(task).catch_unwind().await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::error!(saga = name, "operation panicked, no terminal action sent");
                        return;
                    }
                };
                tracing::info!(saga = name, ?outcome, "async saga settled");
                if !dispatcher.dispatch(outcome) {
                    tracing::debug!(saga = name, "action channel closed, result dropped");
                }
            });
            spawned += 1;
        }
        spawned
    }
}
