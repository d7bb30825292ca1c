use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record from the `/books` collection.
///
/// Only the fields the list renders are named. Everything else in the record
/// is kept as-is in `extra` so the payload survives a round trip through the
/// server untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            extra: Map::new(),
        }
    }

    /// Title for display, falling back when the record has none.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Author for display, falling back when the record has none.
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown Author")
    }
}
