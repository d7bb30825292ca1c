//! Canned book collection with optional delay and forced failure

use crate::source::{BookSource, SourceError};
use async_trait::async_trait;
use shelf_common::Book;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// The 8-record collection shipped with the crate.
pub const BUNDLED_BOOKS: &str = include_str!("../fixtures/books.json");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture is not a JSON array of books: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serves a fixed collection, optionally after a delay, optionally failing.
///
/// A forced network error still waits out the delay first, so a slow failure
/// keeps the list loading for the whole delay before it settles.
#[derive(Clone, Debug)]
pub struct FixtureBookSource {
    books: Vec<Book>,
    delay: Duration,
    force_network_error: bool,
}

impl FixtureBookSource {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            delay: Duration::ZERO,
            force_network_error: false,
        }
    }

    /// The bundled `books.json`.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED_BOOKS)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_network_error(mut self, force: bool) -> Self {
        self.force_network_error = force;
        self
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn forces_network_error(&self) -> bool {
        self.force_network_error
    }

    /// Sleep for the configured delay.
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BookSource for FixtureBookSource {
    async fn fetch_books(&self) -> Result<Vec<Book>, SourceError> {
        self.wait().await;
        if self.force_network_error {
            return Err(SourceError::Network("forced network error".to_string()));
        }
        Ok(self.books.clone())
    }
}

/// Browser timers take a `u32` of milliseconds; longer delays clamp to the
/// maximum instead of wrapping around.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::TimeoutFuture::new(timer_millis(delay)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
