//! shelf-server - serves the book collection over HTTP
//!
//! `GET /books` answers from a fixture, optionally after a delay, optionally
//! by dropping the connection to simulate a network failure.

pub mod books;

pub use books::{books_router, BooksState};
