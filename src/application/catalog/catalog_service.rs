use std::sync::Arc;

use crate::application::logging::{LogStatus, Loggable};
use crate::domain::{Book, BookTitle};
use crate::ports::catalog::Catalog;

use super::errors::{CatalogMaintenanceError, Result};

/// 追加の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddBookOutcome {
    /// カタログに追加された
    Added,
    /// 同じタイトルが既に存在する
    DuplicateTitle,
}

impl Loggable for AddBookOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            AddBookOutcome::Added => LogStatus::Success,
            AddBookOutcome::DuplicateTitle => LogStatus::Failure,
        }
    }
}

/// 削除の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveBookOutcome {
    /// カタログから削除された
    Removed,
    /// タイトルが存在しない
    TitleNotFound,
}

impl Loggable for RemoveBookOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            RemoveBookOutcome::Removed => LogStatus::Success,
            RemoveBookOutcome::TitleNotFound => LogStatus::Failure,
        }
    }
}

/// 書籍をカタログに追加する（純粋な関数）
///
/// ビジネスルール：タイトルはカタログ内で一意であること。
pub async fn add_book(catalog: &Arc<dyn Catalog>, book: Book) -> Result<AddBookOutcome> {
    // 1. タイトルの重複確認
    let existing = catalog
        .find_by_title(&book.title)
        .await
        .map_err(CatalogMaintenanceError::CatalogError)?;

    if existing.is_some() {
        return Ok(AddBookOutcome::DuplicateTitle);
    }

    // 2. 追加してコミット
    catalog
        .save(book)
        .await
        .map_err(CatalogMaintenanceError::CatalogError)?;

    Ok(AddBookOutcome::Added)
}

/// 書籍をカタログから削除する（純粋な関数）
///
/// 貸出中の冊や待ちリストごと削除される。
pub async fn remove_book(
    catalog: &Arc<dyn Catalog>,
    title: &BookTitle,
) -> Result<RemoveBookOutcome> {
    let removed = catalog
        .delete(title)
        .await
        .map_err(CatalogMaintenanceError::CatalogError)?;

    if removed {
        Ok(RemoveBookOutcome::Removed)
    } else {
        Ok(RemoveBookOutcome::TitleNotFound)
    }
}
