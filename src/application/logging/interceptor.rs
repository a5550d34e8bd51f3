use std::future::Future;
use std::sync::Arc;

use crate::domain::Book;
use crate::ports::action_log::ActionLog;

use super::action::Action;

/// ログ上の成否区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogStatus {
    /// 操作は意図した効果を持った
    Success,
    /// 操作は拒否された（期待される失敗）
    Failure,
    /// 操作が障害で完了しなかった（メッセージ付き）
    Fault(String),
}

impl LogStatus {
    fn word(&self) -> &'static str {
        match self {
            LogStatus::Success => "successfully",
            _ => "fail",
        }
    }
}

/// 操作結果からログ区分への写像
///
/// 任意の結果型を成功/失敗の2値ラベルへ落とす契約。
/// Rejected系の結果値は失敗、Loaned/Queued等は成功として扱う。
pub trait Loggable {
    fn log_status(&self) -> LogStatus;
}

/// Okは中身の区分に従い、Errは障害として扱う。
///
/// Errの場合、インターセプタは "<action> failed: <message>" を
/// 記録した上で、Errを変更せずに呼び出し元へ返す。
impl<T: Loggable, E: std::fmt::Display> Loggable for Result<T, E> {
    fn log_status(&self) -> LogStatus {
        match self {
            Ok(inner) => inner.log_status(),
            Err(error) => LogStatus::Fault(error.to_string()),
        }
    }
}

/// 検索結果：1件以上見つかれば成功
impl Loggable for Vec<Book> {
    fn log_status(&self) -> LogStatus {
        if self.is_empty() {
            LogStatus::Failure
        } else {
            LogStatus::Success
        }
    }
}

/// 変更系操作を1呼び出し1行で記録するインターセプタ
///
/// 操作の完了後に必ず1行を追記し、結果をそのまま返す。
/// ログが操作の結果を変えることはない：シンクへの追記に
/// 失敗した場合もtracingで警告するだけで、結果は保持される。
pub async fn with_action_log<T, F>(log: &Arc<dyn ActionLog>, action: Action, operation: F) -> T
where
    T: Loggable,
    F: Future<Output = T>,
{
    let outcome = operation.await;

    let line = format_line(&action, &outcome.log_status());
    if let Err(error) = log.append(&line).await {
        tracing::warn!(line = %line, "failed to append action log: {error}");
    }

    outcome
}

/// ログ行の整形
///
/// - 通常:   `<action> <status>`
/// - 検索:   `<action> "<query>" by <field> completed <status>`
/// - 障害:   `<action> failed: <message>`
fn format_line(action: &Action, status: &LogStatus) -> String {
    if let LogStatus::Fault(message) = status {
        return format!("{} failed: {}", action.fault_label(), message);
    }

    match action {
        Action::Search { query, field } => format!(
            "{} \"{}\" by {} completed {}",
            action.label(),
            query,
            field.log_label(),
            status.word()
        ),
        _ => format!("{} {}", action.label(), status.word()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::search::SearchField;

    struct AlwaysSuccess;

    impl Loggable for AlwaysSuccess {
        fn log_status(&self) -> LogStatus {
            LogStatus::Success
        }
    }

    #[test]
    fn test_format_line_generic() {
        let line = format_line(&Action::BorrowBook, &LogStatus::Success);
        assert_eq!(line, "book borrowed successfully");

        let line = format_line(&Action::BorrowBook, &LogStatus::Failure);
        assert_eq!(line, "book borrowed fail");
    }

    #[test]
    fn test_format_line_search_maps_title_to_name() {
        let action = Action::Search {
            query: "Dune".to_string(),
            field: SearchField::Title,
        };
        let line = format_line(&action, &LogStatus::Success);
        assert_eq!(line, "Search book \"Dune\" by name completed successfully");
    }

    #[test]
    fn test_format_line_search_other_fields() {
        let action = Action::Search {
            query: "Herbert".to_string(),
            field: SearchField::Author,
        };
        let line = format_line(&action, &LogStatus::Failure);
        assert_eq!(line, "Search book \"Herbert\" by author completed fail");
    }

    #[test]
    fn test_format_line_fault() {
        let line = format_line(
            &Action::Register,
            &LogStatus::Fault("user store error".to_string()),
        );
        assert_eq!(line, "Register failed: user store error");
    }

    #[test]
    fn test_result_loggable_classification() {
        let ok: Result<AlwaysSuccess, String> = Ok(AlwaysSuccess);
        assert_eq!(ok.log_status(), LogStatus::Success);

        let err: Result<AlwaysSuccess, String> = Err("boom".to_string());
        assert_eq!(err.log_status(), LogStatus::Fault("boom".to_string()));
    }
}
