use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Requester;

/// 待ちリスト - 貸出可能な在庫がないタイトルを待つ利用者のFIFOキュー
///
/// 不変条件：先に並んだ利用者が先に通知される（厳密なFIFO）。
/// 重複登録は許容される。同じ利用者が2回並べば2回通知される。
/// 容量の上限はなく、永続化はカタログ側の責務。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingList(VecDeque<Requester>);

impl WaitingList {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    /// 末尾に利用者を追加する
    ///
    /// 一意性チェックは行わない。
    pub fn enqueue(&mut self, requester: Requester) {
        self.0.push_back(requester);
    }

    /// 先頭の利用者を取り出す
    ///
    /// 空の場合はNone（エラーではない）。
    pub fn dequeue(&mut self) -> Option<Requester> {
        self.0.pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requester> {
        self.0.iter()
    }
}

impl FromIterator<Requester> for WaitingList {
    fn from_iter<I: IntoIterator<Item = Requester>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester(name: &str) -> Requester {
        Requester::new(name).unwrap()
    }

    // TDD: WaitingList のテスト
    #[test]
    fn test_dequeue_empty_returns_none() {
        let mut list = WaitingList::new();
        assert!(list.dequeue().is_none());
    }

    #[test]
    fn test_enqueue_dequeue_is_fifo() {
        let mut list = WaitingList::new();
        list.enqueue(requester("alice"));
        list.enqueue(requester("bob"));
        list.enqueue(requester("carol"));

        assert_eq!(list.dequeue(), Some(requester("alice")));
        assert_eq!(list.dequeue(), Some(requester("bob")));
        assert_eq!(list.dequeue(), Some(requester("carol")));
        assert!(list.dequeue().is_none());
    }

    #[test]
    fn test_enqueue_allows_duplicates() {
        let mut list = WaitingList::new();
        list.enqueue(requester("alice"));
        list.enqueue(requester("alice"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.dequeue(), Some(requester("alice")));
        assert_eq!(list.dequeue(), Some(requester("alice")));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut list = WaitingList::new();
        assert!(list.is_empty());
        list.enqueue(requester("alice"));
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
