//! shelf-core - fetching the book collection
//!
//! `BookSource` is the single network capability the app needs. The HTTP
//! implementation talks to a real `/books` endpoint; the fixture
//! implementation serves a canned collection with optional delay and forced
//! failure, and backs both the server and the tests. `BookListLoader` drives a
//! `BookList` through one fetch and publishes every transition.

pub mod fixture;
pub mod http;
pub mod loader;
pub mod report;
pub mod source;

pub use fixture::{FixtureBookSource, FixtureError};
pub use http::HttpBookSource;
pub use loader::BookListLoader;
pub use report::{ErrorReporter, TracingReporter};
pub use shelf_common::{Book, BookList, LoadingState, TransitionError};
pub use source::{BookSource, SourceError};
