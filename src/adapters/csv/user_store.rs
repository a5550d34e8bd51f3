use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::auth::hash_password;
use crate::ports::user_store::{Result, UserRecord, UserStore as UserStoreTrait};

/// Username and password for the seeded administrator account
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// One row of users.csv
#[derive(Debug, Serialize, Deserialize)]
struct UserRow {
    username: String,
    password_hash: String,
}

/// CSV file implementation of UserStore
///
/// When the store is empty (missing file or zero rows) a default
/// administrator account is seeded and committed, so a fresh
/// installation always has one login.
#[allow(dead_code)]
pub struct UserStore {
    path: PathBuf,
    users: Mutex<Vec<UserRecord>>,
}

#[allow(dead_code)]
impl UserStore {
    /// Open a user store backed by the given CSV file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut users = if path.exists() {
            Self::load(&path)?
        } else {
            Vec::new()
        };

        let store_was_empty = users.is_empty();
        if store_was_empty {
            users.push(UserRecord {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password_hash: hash_password(DEFAULT_ADMIN_PASSWORD),
            });
        }

        let store = Self {
            path,
            users: Mutex::new(users),
        };

        if store_was_empty {
            let users = store.users.lock().unwrap();
            store.commit(&users)?;
        }

        Ok(store)
    }

    fn load(path: &Path) -> Result<Vec<UserRecord>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut users = Vec::new();
        for row in reader.deserialize::<UserRow>() {
            let row = row?;
            users.push(UserRecord {
                username: row.username,
                password_hash: row.password_hash,
            });
        }
        Ok(users)
    }

    fn commit(&self, users: &[UserRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for user in users {
            writer.serialize(UserRow {
                username: user.username.clone(),
                password_hash: user.password_hash.clone(),
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl UserStoreTrait for UserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    /// Append one record and commit the whole store to disk
    async fn insert(&self, user: UserRecord) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        users.push(user);
        self.commit(&users)
    }
}
