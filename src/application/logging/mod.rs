mod action;
mod interceptor;

#[allow(unused_imports)]
pub use action::Action;
#[allow(unused_imports)]
pub use interceptor::{LogStatus, Loggable, with_action_log};
