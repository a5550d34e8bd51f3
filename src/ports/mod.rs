#[allow(unused_imports)]
pub mod action_log;
#[allow(unused_imports)]
pub mod catalog;
#[allow(unused_imports)]
pub mod notification;
#[allow(unused_imports)]
pub mod user_store;

#[allow(unused_imports)]
pub use action_log::*;
#[allow(unused_imports)]
pub use catalog::*;
#[allow(unused_imports)]
pub use notification::*;
#[allow(unused_imports)]
pub use user_store::*;
