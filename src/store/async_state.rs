use super::action::AsyncAction;

/// Slice state for one async operation.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T, E> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self::initial()
    }
}

impl<T, E> AsyncState<T, E> {
    pub fn initial() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }

    /// Loading, keeping whatever data was already shown.
    pub fn load(data: Option<T>) -> Self {
        Self {
            loading: true,
            data,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            loading: false,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: E) -> Self {
        Self {
            loading: false,
            data: None,
            error: Some(error),
        }
    }

    /// Generic reducer for an [`AsyncAction`] targeting this slice.
    pub fn apply<I>(&mut self, action: &AsyncAction<I, T, E>)
    where
        T: Clone,
        E: Clone,
    {
        *self = match action {
            AsyncAction::Request(_) => Self::load(self.data.take()),
            AsyncAction::Success(data) => Self::success(data.clone()),
            AsyncAction::Failure(error) => Self::error(error.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Slice = AsyncState<u32, String>;

    #[test]
    fn test_request_keeps_previous_data() {
        let mut state = Slice::success(3);
        state.apply(&AsyncAction::<(), _, _>::Request(()));
        assert_eq!(state, Slice::load(Some(3)));
        assert!(state.loading);
    }

    #[test]
    fn test_success_and_failure_settle() {
        let mut state = Slice::initial();
        state.apply(&AsyncAction::<(), _, _>::Request(()));
        state.apply(&AsyncAction::<(), _, _>::Success(9));
        assert_eq!(state, Slice::success(9));

        state.apply(&AsyncAction::<(), _, _>::Failure("boom".into()));
        assert_eq!(state, Slice::error("boom".into()));
        assert!(state.data.is_none());
    }
}
