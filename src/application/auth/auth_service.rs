use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::application::logging::{LogStatus, Loggable};
use crate::ports::user_store::{UserRecord, UserStore};

use super::errors::{AuthError, Result};

/// 登録の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// 登録された
    Registered,
    /// ユーザー名が既に存在する
    UsernameTaken,
}

impl std::fmt::Display for RegisterOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterOutcome::Registered => write!(f, "Registration successful."),
            RegisterOutcome::UsernameTaken => {
                write!(f, "Registration failed: Username already exists.")
            }
        }
    }
}

impl Loggable for RegisterOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            RegisterOutcome::Registered => LogStatus::Success,
            RegisterOutcome::UsernameTaken => LogStatus::Failure,
        }
    }
}

/// ログインの結果
///
/// 「ユーザー名が無い」と「パスワード不一致」は区別しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    InvalidCredentials,
}

impl std::fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginOutcome::LoggedIn => write!(f, "Login successful."),
            LoginOutcome::InvalidCredentials => {
                write!(f, "Login failed: Invalid username or password.")
            }
        }
    }
}

impl Loggable for LoginOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            LoginOutcome::LoggedIn => LogStatus::Success,
            LoginOutcome::InvalidCredentials => LogStatus::Failure,
        }
    }
}

/// パスワードをSHA-256でハッシュ化し、16進文字列で返す
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

/// 利用者を登録する（純粋な関数）
///
/// ビジネスルール：
/// - ユーザー名は一意であること
/// - パスワードはハッシュのみ保存する（平文は保存しない）
///
/// ストアのI/O障害はErrとして呼び出し元へ伝播する
/// （インターセプタが障害行を記録した上で再送出する経路）。
pub async fn register(
    users: &Arc<dyn UserStore>,
    username: &str,
    password: &str,
) -> Result<RegisterOutcome> {
    // 1. ユーザー名の重複確認
    let existing = users
        .find_by_username(username)
        .await
        .map_err(AuthError::UserStoreError)?;

    if existing.is_some() {
        return Ok(RegisterOutcome::UsernameTaken);
    }

    // 2. レコードを追加（ハッシュのみ保存）
    let record = UserRecord {
        username: username.to_string(),
        password_hash: hash_password(password),
    };
    users.insert(record).await.map_err(AuthError::UserStoreError)?;

    Ok(RegisterOutcome::Registered)
}

/// ログインする（純粋な関数）
///
/// ユーザー名が存在し、パスワードハッシュが一致した場合のみ成功。
pub async fn login(
    users: &Arc<dyn UserStore>,
    username: &str,
    password: &str,
) -> Result<LoginOutcome> {
    let user = users
        .find_by_username(username)
        .await
        .map_err(AuthError::UserStoreError)?;

    match user {
        Some(user) if user.password_hash == hash_password(password) => Ok(LoginOutcome::LoggedIn),
        _ => Ok(LoginOutcome::InvalidCredentials),
    }
}
