use crate::source::{BookSource, SourceError};
use async_trait::async_trait;
use shelf_common::Book;
use tracing::debug;

/// Fetches the collection from `GET {base_url}/books`.
pub struct HttpBookSource {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBookSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn books_url(&self) -> String {
        format!("{}/books", self.base_url.trim_end_matches('/'))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BookSource for HttpBookSource {
    async fn fetch_books(&self) -> Result<Vec<Book>, SourceError> {
        let url = self.books_url();
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status(resp.status().as_u16()));
        }

        // Read the whole body first so a connection dropped mid-body counts
        // as a network failure rather than a parse failure.
        let body = resp
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| SourceError::Parse(e.to_string()))
    }
}
