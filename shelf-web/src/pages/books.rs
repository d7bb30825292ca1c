use crate::api;
use dioxus::prelude::*;
use shelf_ui::stores::BookListState;
use shelf_ui::BookListView;
use tracing::warn;

/// Book list page.
///
/// Owns one loader for the lifetime of the page. Two tasks run on mount: one
/// drives the fetch, the other mirrors each published transition into the
/// store the view reads. Both are cancelled when the page unmounts.
#[component]
pub fn Books() -> Element {
    let mut state = use_store(BookListState::default);

    use_hook(move || {
        let loader = api::books_loader();
        let mut rx = loader.subscribe();

        spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = BookListState::from(&*rx.borrow_and_update());
                state.set(snapshot);
            }
        });

        spawn(async move {
            if let Err(e) = loader.start().await {
                warn!("Book list loader started twice: {e}");
            }
        });
    });

    rsx! {
        BookListView { state }
    }
}
