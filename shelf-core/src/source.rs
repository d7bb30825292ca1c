use async_trait::async_trait;
use shelf_common::Book;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Parse(String),
}

/// Where the book collection comes from.
///
/// One operation, one request. Implementations must not retry and must not
/// impose their own timeout; a slow source simply keeps the list loading.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BookSource {
    async fn fetch_books(&self) -> Result<Vec<Book>, SourceError>;
}
