pub mod action_log;
pub mod catalog;
pub mod notification;
pub mod user_store;

#[allow(unused_imports)]
pub use action_log::ActionLog;
#[allow(unused_imports)]
pub use catalog::Catalog;
#[allow(unused_imports)]
pub use notification::AvailabilityNotifier;
#[allow(unused_imports)]
pub use user_store::UserStore;
