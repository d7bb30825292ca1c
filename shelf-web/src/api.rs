use shelf_core::{BookListLoader, HttpBookSource};

/// Origin the page was served from. The `/books` endpoint lives on the same
/// host, so this is the base URL for every request.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Loader for the book list served alongside this page.
pub fn books_loader() -> BookListLoader<HttpBookSource> {
    BookListLoader::new(HttpBookSource::new(origin()))
}
