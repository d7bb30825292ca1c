//! Book list state store

use dioxus::prelude::*;
use shelf_common::{Book, BookList, LoadingState};

/// State for the book list view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BookListState {
    /// Where the fetch is in its lifecycle
    pub status: LoadingState,
    /// Books in the order the server sent them
    pub books: Vec<Book>,
    /// Error message if loading failed
    pub error: Option<String>,
}

impl From<&BookList> for BookListState {
    fn from(list: &BookList) -> Self {
        Self {
            status: list.state(),
            books: list.books().to_vec(),
            error: list.error().map(str::to_string),
        }
    }
}

impl BookListState {
    /// The loading indicator is rendered exactly while this is true.
    pub fn shows_loading(&self) -> bool {
        self.status == LoadingState::Loading
    }

    /// The book list region is rendered only once the fetch succeeded.
    pub fn shows_books(&self) -> bool {
        self.status == LoadingState::Loaded
    }
}
