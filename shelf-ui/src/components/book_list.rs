//! Book list view component - pure rendering, no data fetching
//!
//! Accepts `ReadStore<BookListState>`. What gets mounted is decided by the
//! store's `shows_loading` / `shows_books`, so the loading indicator is gone
//! from the DOM once the fetch settles either way.

use crate::components::book_item::BookItem;
use crate::components::helpers::{ErrorDisplay, LoadingIndicator};
use crate::stores::book_list::{BookListState, BookListStateStoreExt};
use dioxus::prelude::*;
use shelf_common::LoadingState;

#[component]
pub fn BookListView(state: ReadStore<BookListState>) -> Element {
    let view = state.read().clone();
    let failed = view.status == LoadingState::Failed;

    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto flex flex-col",
                h1 { class: "text-3xl font-bold text-white mb-6", "Books" }
                if view.shows_loading() {
                    LoadingIndicator {}
                } else if view.shows_books() {
                    ul { class: "flex flex-col gap-3", "aria-label": "books",
                        if view.books.is_empty() {
                            li { class: "text-center py-12 text-gray-400", "No books yet" }
                        }
                        for (idx, book) in view.books.into_iter().enumerate() {
                            BookItem { key: "{idx}", book }
                        }
                    }
                } else if failed {
                    ErrorDisplay {
                        label: "Books failed to load".to_string(),
                        heading: "The book list could not be loaded.".to_string(),
                        message: view.error.unwrap_or_else(|| "Unknown error".to_string()),
                    }
                }
            }
        }
    }
}
