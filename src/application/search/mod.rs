mod errors;
mod search_service;

#[allow(unused_imports)]
pub use errors::{Result, SearchError};
#[allow(unused_imports)]
pub use search_service::{DisplayFilter, SearchField, display_books, perform_search};
