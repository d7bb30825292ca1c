mod book;
mod book_list;
mod loading_state;

pub use book::Book;
pub use book_list::{BookList, TransitionError};
pub use loading_state::LoadingState;
