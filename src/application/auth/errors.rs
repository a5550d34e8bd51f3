use thiserror::Error;

/// 認証アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// UserStoreのエラー
    #[error("user store error")]
    UserStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 認証アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, AuthError>;
