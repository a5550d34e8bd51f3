mod lending_service;
mod outcome;

#[allow(unused_imports)]
pub use lending_service::{ServiceDependencies, TitleLocks, borrow_book, return_book};
#[allow(unused_imports)]
pub use outcome::{BorrowOutcome, RejectReason, ReturnOutcome};
