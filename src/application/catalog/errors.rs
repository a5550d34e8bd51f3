use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogMaintenanceError {
    /// カタログのエラー
    #[error("catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// カタログ管理アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogMaintenanceError>;
