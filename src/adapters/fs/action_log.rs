use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::action_log::{ActionLog as ActionLogTrait, Result};

/// Append-only text file implementation of ActionLog
///
/// The file handle is injected once and shared; each append takes the
/// lock, writes the line plus a newline and flushes before releasing,
/// so lines are never interleaved and survive an abrupt exit.
#[allow(dead_code)]
pub struct ActionLog {
    file: Mutex<File>,
}

#[allow(dead_code)]
impl ActionLog {
    /// Open the log file in append mode, creating it when missing
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

#[async_trait]
impl ActionLogTrait for ActionLog {
    async fn append(&self, line: &str) -> Result<()> {
        let mut file = self.file.lock().unwrap();
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }
}
