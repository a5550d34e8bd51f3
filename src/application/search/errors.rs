use thiserror::Error;

/// 検索アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum SearchError {
    /// 数値フィールドに対するクエリが数値として解釈できない
    #[error("invalid query for numeric field: {0}")]
    InvalidQuery(String),

    /// 検索フィールド名が不正
    #[error("unknown search field: {0}")]
    UnknownField(String),

    /// 一覧フィルタ名が不正
    #[error("unknown display filter: {0}")]
    UnknownFilter(String),

    /// カタログのエラー
    #[error("catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 検索アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, SearchError>;
