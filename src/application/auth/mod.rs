mod auth_service;
mod errors;

#[allow(unused_imports)]
pub use auth_service::{LoginOutcome, RegisterOutcome, hash_password, login, register};
#[allow(unused_imports)]
pub use errors::{AuthError, Result};
