use crate::ports::action_log::{ActionLog as ActionLogTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of ActionLog
///
/// Records appended lines in memory. Appends can be made to fail to
/// verify that a broken sink never alters an operation's result.
#[allow(dead_code)]
pub struct ActionLog {
    lines: Mutex<Vec<String>>,
    fail_appends: Mutex<bool>,
}

#[allow(dead_code)]
impl ActionLog {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            fail_appends: Mutex::new(false),
        }
    }

    /// Make every subsequent append fail
    pub fn fail_appends(&self, fail: bool) {
        *self.fail_appends.lock().unwrap() = fail;
    }

    /// Lines recorded so far, in append order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionLogTrait for ActionLog {
    async fn append(&self, line: &str) -> Result<()> {
        if *self.fail_appends.lock().unwrap() {
            return Err("injected action log failure".into());
        }
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
