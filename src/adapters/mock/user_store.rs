use crate::ports::user_store::{Result, UserRecord, UserStore as UserStoreTrait};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of UserStore
///
/// Keeps user records in memory. Store failures can be injected to
/// exercise the fault-logging path of the interceptor.
#[allow(dead_code)]
pub struct UserStore {
    users: Mutex<Vec<UserRecord>>,
    fail_all: Mutex<bool>,
}

#[allow(dead_code)]
impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_all: Mutex::new(false),
        }
    }

    /// Seed a user record for testing purposes
    pub fn add_user(&self, user: UserRecord) {
        self.users.lock().unwrap().push(user);
    }

    /// Make every subsequent call fail
    pub fn fail_all(&self, fail: bool) {
        *self.fail_all.lock().unwrap() = fail;
    }

    /// Current records, bypassing the port
    pub fn users(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().clone()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStoreTrait for UserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        if *self.fail_all.lock().unwrap() {
            return Err("injected user store failure".into());
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn insert(&self, user: UserRecord) -> Result<()> {
        if *self.fail_all.lock().unwrap() {
            return Err("injected user store failure".into());
        }
        self.users.lock().unwrap().push(user);
        Ok(())
    }
}
