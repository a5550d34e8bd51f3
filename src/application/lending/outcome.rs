use crate::application::logging::{LogStatus, Loggable};
use crate::domain::Requester;

/// 拒否理由
///
/// 期待される失敗条件は例外ではなく、通常の結果値として返される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// タイトルがカタログに存在しない
    TitleNotFound,
    /// 在庫がなく、待ちリスト用の利用者名も指定されていない
    NoneAvailable,
    /// 貸出中の冊がない（全冊が書架にある）
    NoCopiesOnLoan,
    /// カタログの検索・コミットに失敗した
    Storage(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::TitleNotFound => write!(f, "not found"),
            RejectReason::NoneAvailable => write!(f, "unavailable, no requester"),
            RejectReason::NoCopiesOnLoan => write!(f, "no copies on loan"),
            RejectReason::Storage(detail) => write!(f, "error: {detail}"),
        }
    }
}

/// 貸出操作の結果（3値）
///
/// 呼び出し側は必ずいずれかの結果値を受け取る。
/// エンジンは期待される失敗でもストレージ障害でもErrを返さない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// 1冊が貸し出された
    Loaned,
    /// 在庫がなく、待ちリストに登録された
    Queued,
    /// 貸出は行われなかった
    Rejected(RejectReason),
}

impl BorrowOutcome {
    #[allow(dead_code)]
    pub fn is_rejected(&self) -> bool {
        matches!(self, BorrowOutcome::Rejected(_))
    }
}

/// ログ区分：Loaned/Queuedは成功、Rejectedは失敗
impl Loggable for BorrowOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            BorrowOutcome::Loaned | BorrowOutcome::Queued => LogStatus::Success,
            BorrowOutcome::Rejected(_) => LogStatus::Failure,
        }
    }
}

/// 返却操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 返却された。待ちリスト先頭がいた場合は通知済みの利用者を運ぶ
    Returned { notified: Option<Requester> },
    /// 返却は行われなかった
    Rejected(RejectReason),
}

impl ReturnOutcome {
    #[allow(dead_code)]
    pub fn is_rejected(&self) -> bool {
        matches!(self, ReturnOutcome::Rejected(_))
    }
}

/// ログ区分：Returnedは成功、Rejectedは失敗
impl Loggable for ReturnOutcome {
    fn log_status(&self) -> LogStatus {
        match self {
            ReturnOutcome::Returned { .. } => LogStatus::Success,
            ReturnOutcome::Rejected(_) => LogStatus::Failure,
        }
    }
}
