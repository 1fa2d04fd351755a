//! Minimal unidirectional state store: typed actions, reducers, and
//! side-effect handlers that run on the tokio runtime.
//!
//! ```text
//! Action ──▶ Store::dispatch ──▶ Reducer ──▶ State
//!                   │
//!                   └──▶ SagaMiddleware ──▶ task ──▶ Dispatcher ──▶ Action
//! ```

pub mod action;
pub mod async_state;
pub mod saga;
pub mod thunk;

use std::fmt::Debug;
use tokio::sync::mpsc;

pub use action::{AsyncAction, AsyncActionCreator};
pub use async_state::AsyncState;
pub use saga::{create_async_saga, AsyncSaga, Saga, SagaMiddleware};
pub use thunk::{create_async_thunk, AsyncThunk};

/// Evolves a piece of state in response to an action.
///
/// Reducers only touch `self`. Anything asynchronous belongs in a saga or a
/// thunk.
pub trait Reducer<A> {
    fn reduce(&mut self, action: &A);
}

/// Cloneable handle used by effect tasks to feed actions back into the loop.
pub struct Dispatcher<A> {
    tx: mpsc::UnboundedSender<A>,
}

impl<A> Dispatcher<A> {
    pub fn new(tx: mpsc::UnboundedSender<A>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<A>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Queue an action. Returns `false` if the loop has shut down.
    pub fn dispatch(&self, action: A) -> bool {
        self.tx.send(action).is_ok()
    }
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

pub struct Store<S, A> {
    state: S,
    sagas: SagaMiddleware<A>,
    dispatcher: Dispatcher<A>,
    version: u64,
}

impl<S, A> Store<S, A>
where
    S: Reducer<A>,
    A: Debug + Send + 'static,
{
    pub fn new(initial_state: S, dispatcher: Dispatcher<A>) -> Self {
        Self {
            state: initial_state,
            sagas: SagaMiddleware::new(dispatcher.clone()),
            dispatcher,
            version: 0,
        }
    }

    pub fn register_saga(&mut self, saga: impl Saga<A> + 'static) {
        self.sagas.register(saga);
    }

    pub fn saga_count(&self) -> usize {
        self.sagas.count()
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn select<'a, T: ?Sized>(&'a self, selector: impl FnOnce(&'a S) -> &'a T) -> &'a T {
        selector(&self.state)
    }

    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.dispatcher
    }

    /// Incremented on every dispatch; lets the view skip redraws.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Run the reducer, then hand the action to the registered sagas.
    ///
    /// Returns the number of saga tasks spawned for this action.
    pub fn dispatch(&mut self, action: A) -> usize {
        tracing::debug!(?action, "dispatch");
        self.state.reduce(&action);
        self.version = self.version.wrapping_add(1);
        self.sagas.run(&action)
    }
}
