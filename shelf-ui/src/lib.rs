//! shelf-ui - View components and stores for the book list
//!
//! Components here only render what they are given. Fetching lives in
//! shelf-core and wiring lives in shelf-web.

pub mod components;
pub mod stores;

pub use components::*;
pub use shelf_common::{Book, LoadingState};
