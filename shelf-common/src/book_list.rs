use crate::{Book, LoadingState};

/// Rejected state change. Carries both ends so the log says what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move book list from {from:?} to {to:?}")]
pub struct TransitionError {
    pub from: LoadingState,
    pub to: LoadingState,
}

/// Pure state machine for one book list fetch.
///
/// Owns the loading state, the collection, and the failure message. Moves
/// strictly Idle -> Loading -> Loaded | Failed and never goes back, so a
/// failed fetch stays failed. No I/O happens here; the loader drives it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookList {
    state: LoadingState,
    books: Vec<Book>,
    error: Option<String>,
}

impl BookList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Loading. Called right before the request goes out.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.advance(LoadingState::Loading)
    }

    /// Loading -> Loaded, keeping the books in the order received.
    pub fn resolve(&mut self, books: Vec<Book>) -> Result<(), TransitionError> {
        self.advance(LoadingState::Loaded)?;
        self.books = books;
        Ok(())
    }

    /// Loading -> Failed. No books are kept.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.advance(LoadingState::Failed)?;
        self.books.clear();
        self.error = Some(message.into());
        Ok(())
    }

    fn advance(&mut self, to: LoadingState) -> Result<(), TransitionError> {
        if !self.state.can_transition_to(to) {
            return Err(TransitionError {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The loading indicator is shown exactly while this is true.
    pub fn is_loading(&self) -> bool {
        self.state == LoadingState::Loading
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
