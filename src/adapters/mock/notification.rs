use crate::domain::{BookTitle, Requester};
use crate::ports::notification::{AvailabilityNotifier as AvailabilityNotifierTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of AvailabilityNotifier
///
/// Does not deliver anything; records every `(title, requester)`
/// pair so tests can assert notification order.
#[allow(dead_code)]
pub struct AvailabilityNotifier {
    notifications: Mutex<Vec<(BookTitle, Requester)>>,
}

#[allow(dead_code)]
impl AvailabilityNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Notifications recorded so far, in delivery order
    pub fn notifications(&self) -> Vec<(BookTitle, Requester)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for AvailabilityNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityNotifierTrait for AvailabilityNotifier {
    async fn notify_available(&self, title: &BookTitle, requester: &Requester) -> Result<()> {
        self.notifications
            .lock()
            .unwrap()
            .push((title.clone(), requester.clone()));
        Ok(())
    }
}
