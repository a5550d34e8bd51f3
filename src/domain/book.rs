use serde::{Deserialize, Serialize};

use super::{
    BookTitle, BorrowError, BorrowEvent, CopyLoaned, CopyReturned, Requester, RequesterQueued,
    ReturnError, WaitingList,
};

/// Book集約 - カタログ内の1タイトルと、その貸出状態
///
/// `waiting_list`はこのBookが排他的に所有する。
///
/// 不変条件：
/// - `copies_available <= total_copies`（返却で元の在庫を超えない）
/// - 各カウンタは負にならない
/// - `popularity_count`は貸出成功時のみ増える（待ちリスト登録・返却では不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: BookTitle,
    pub author: String,
    pub genre: String,
    pub year: u16,
    /// 元の在庫数。返却の上限チェックに使用される。
    pub total_copies: u32,
    /// 貸出されていない冊数
    pub copies_available: u32,
    /// 累計貸出数
    pub loaned_count: u32,
    /// 人気カウント（貸出成功ごとに1増える）
    pub popularity_count: u32,
    pub waiting_list: WaitingList,
}

impl Book {
    /// 全冊が書架にある状態で新規作成する
    pub fn new(
        title: BookTitle,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: u16,
        total_copies: u32,
    ) -> Self {
        Self {
            title,
            author: author.into(),
            genre: genre.into(),
            year,
            total_copies,
            copies_available: total_copies,
            loaned_count: 0,
            popularity_count: 0,
            waiting_list: WaitingList::new(),
        }
    }

    /// 貸出中か（貸出可能な在庫が1冊もない）
    ///
    /// 保存される状態ではなく、在庫数から導出される。
    pub fn is_loaned(&self) -> bool {
        self.copies_available == 0
    }
}

/// 書籍1タイトルの貸出状態機械：
///
/// 状態は `Available（在庫あり）` と `FullyLoaned（全冊貸出中）` の2つ。
/// - 貸出成功：在庫を1減らす（最後の1冊ならFullyLoanedへ遷移）
/// - FullyLoanedでの貸出：利用者名があれば待ちリスト登録、なければ拒否
/// - 返却：在庫を1戻し（FullyLoanedならAvailableへ遷移）、
///   待ちリスト先頭がいれば通知対象として取り出す
///
/// 純粋関数：1冊を貸し出す、または待ちリストに並べる
///
/// ビジネスルール：
/// - 在庫があれば1冊減らし、貸出数と人気カウントを1増やす
/// - 在庫がなく利用者名があれば待ちリスト末尾に追加する（人気カウント不変）
/// - 在庫がなく利用者名もなければ貸出不可
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn borrow_copy(
    book: &Book,
    requester: Option<&Requester>,
) -> Result<(Book, BorrowEvent), BorrowError> {
    if book.copies_available > 0 {
        let mut updated = book.clone();
        updated.copies_available -= 1;
        updated.loaned_count += 1;
        updated.popularity_count += 1;

        let event = CopyLoaned {
            title: updated.title.clone(),
            borrower: requester.cloned(),
            copies_left: updated.copies_available,
        };

        return Ok((updated, BorrowEvent::CopyLoaned(event)));
    }

    match requester {
        Some(requester) => {
            let mut updated = book.clone();
            updated.waiting_list.enqueue(requester.clone());

            let event = RequesterQueued {
                title: updated.title.clone(),
                requester: requester.clone(),
                position: updated.waiting_list.len(),
            };

            Ok((updated, BorrowEvent::RequesterQueued(event)))
        }
        None => Err(BorrowError::NoneAvailable),
    }
}

/// 純粋関数：1冊を返却する
///
/// ビジネスルール：
/// - 全冊が書架にある場合は受け付けない（在庫超過の防止）
/// - 在庫を1冊戻し、待ちリスト先頭の利用者を通知対象として取り出す
/// - 貸出数・人気カウントは変化しない
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn return_copy(book: &Book) -> Result<(Book, CopyReturned), ReturnError> {
    if book.copies_available >= book.total_copies {
        return Err(ReturnError::NoCopiesOnLoan);
    }

    let mut updated = book.clone();
    updated.copies_available += 1;
    let notified = updated.waiting_list.dequeue();

    let event = CopyReturned {
        title: updated.title.clone(),
        notified,
        copies_available: updated.copies_available,
    };

    Ok((updated, event))
}
