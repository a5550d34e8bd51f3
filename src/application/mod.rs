pub mod auth;
pub mod catalog;
pub mod lending;
pub mod logging;
pub mod search;
