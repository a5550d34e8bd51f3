use serde::{Deserialize, Serialize};

use super::{BookTitle, Requester};

/// イベント：1冊が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyLoaned {
    pub title: BookTitle,
    /// 借り手（匿名貸出ではNone）
    pub borrower: Option<Requester>,
    pub copies_left: u32,
}

/// イベント：利用者が待ちリストに並んだ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequesterQueued {
    pub title: BookTitle,
    pub requester: Requester,
    /// 待ちリスト内の位置（1始まり）
    pub position: usize,
}

/// イベント：1冊が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReturned {
    pub title: BookTitle,
    /// 待ちリスト先頭から取り出され、通知対象となった利用者
    pub notified: Option<Requester>,
    pub copies_available: u32,
}

/// 貸出操作が生むイベントの統合型
///
/// 貸出は「貸出成功」か「待ちリスト登録」のどちらかのイベントを生む。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowEvent {
    CopyLoaned(CopyLoaned),
    RequesterQueued(RequesterQueued),
}
