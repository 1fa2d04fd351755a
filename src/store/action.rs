use std::fmt;

/// The three phases of an asynchronous operation.
///
/// `I` is the request input (`()` when the operation takes none), `O` the
/// success payload and `E` the failure payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction<I, O, E> {
    Request(I),
    Success(O),
    Failure(E),
}

impl<I, O, E> AsyncAction<I, O, E> {
    pub fn phase(&self) -> &'static str {
        match self {
            AsyncAction::Request(_) => "request",
            AsyncAction::Success(_) => "success",
            AsyncAction::Failure(_) => "failure",
        }
    }
}

/// Builds and recognizes the request/success/failure actions of one async
/// operation inside an application action type `A`.
///
/// `wrap` embeds an [`AsyncAction`] into `A`; `unwrap` projects it back out.
/// Both are plain function pointers, so a creator is `Copy` and can be stored
/// in a `const`.
pub struct AsyncActionCreator<I, O, E, A> {
    name: &'static str,
    wrap: fn(AsyncAction<I, O, E>) -> A,
    unwrap: fn(&A) -> Option<&AsyncAction<I, O, E>>,
}

impl<I, O, E, A> AsyncActionCreator<I, O, E, A> {
    pub const fn new(
        name: &'static str,
        wrap: fn(AsyncAction<I, O, E>) -> A,
        unwrap: fn(&A) -> Option<&AsyncAction<I, O, E>>,
    ) -> Self {
        Self { name, wrap, unwrap }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn request(&self, input: I) -> A {
        (self.wrap)(AsyncAction::Request(input))
    }

    pub fn success(&self, output: O) -> A {
        (self.wrap)(AsyncAction::Success(output))
    }

    pub fn failure(&self, error: E) -> A {
        (self.wrap)(AsyncAction::Failure(error))
    }

    /// Returns the request input if `action` is this operation's request.
    pub fn match_request<'a>(&self, action: &'a A) -> Option<&'a I>
    where
        O: 'a,
        E: 'a,
    {
        match (self.unwrap)(action)? {
            AsyncAction::Request(input) => Some(input),
            _ => None,
        }
    }

    pub fn match_any<'a>(&self, action: &'a A) -> Option<&'a AsyncAction<I, O, E>> {
        (self.unwrap)(action)
    }
}

impl<I, O, E, A> Clone for AsyncActionCreator<I, O, E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O, E, A> Copy for AsyncActionCreator<I, O, E, A> {}

impl<I, O, E, A> fmt::Debug for AsyncActionCreator<I, O, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncActionCreator")
            .field("name", &self.name)
            .finish()
    }
}
