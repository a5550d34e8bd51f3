mod catalog_service;
mod errors;

#[allow(unused_imports)]
pub use catalog_service::{AddBookOutcome, RemoveBookOutcome, add_book, remove_book};
#[allow(unused_imports)]
pub use errors::{CatalogMaintenanceError, Result};
