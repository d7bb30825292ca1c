pub mod book_item;
pub mod book_list;
pub mod helpers;

pub use book_item::BookItem;
pub use book_list::BookListView;
pub use helpers::*;
