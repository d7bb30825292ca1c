//! Single book row - pure view

use dioxus::prelude::*;
use shelf_common::Book;

#[component]
pub fn BookItem(book: Book) -> Element {
    let title = book.display_title().to_string();
    let author = book.display_author().to_string();

    rsx! {
        li {
            class: "bg-gray-800 rounded-lg px-4 py-3 shadow hover:shadow-lg transition-shadow",
            "aria-label": "book",
            "data-testid": "book",
            p { class: "text-white font-medium", "{title}" }
            p { class: "text-sm text-gray-400", "{author}" }
        }
    }
}
