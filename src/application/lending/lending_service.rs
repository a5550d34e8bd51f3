use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{self, BookTitle, commands::*};
use crate::ports::catalog::Catalog;
use crate::ports::notification::AvailabilityNotifier;

use super::outcome::{BorrowOutcome, RejectReason, ReturnOutcome};

/// タイトルごとの直列化ロック
///
/// 貸出・返却はBookの読み取り・変更・コミットを不可分に行う必要が
/// あるため、同一タイトルに対する変更系操作は同時に1つに制限する。
/// 異なるタイトル同士の操作は並行して進行できる。
#[derive(Default)]
pub struct TitleLocks {
    locks: Mutex<HashMap<BookTitle, Arc<tokio::sync::Mutex<()>>>>,
}

impl TitleLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// タイトル用のロックを取得する
    ///
    /// ガードを保持している間、同一タイトルの操作は待たされる。
    async fn acquire(&self, title: &BookTitle) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            Arc::clone(locks.entry(title.clone()).or_default())
        };
        lock.lock_owned().await
    }
}

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<dyn Catalog>,
    pub notifier: Arc<dyn AvailabilityNotifier>,
    pub locks: Arc<TitleLocks>,
}

/// 書籍を借りる、または待ちリストに並ぶ（純粋な関数）
///
/// ビジネスルール：
/// - タイトルはカタログに完全一致で存在すること
/// - 在庫があれば貸出（在庫-1、貸出数+1、人気カウント+1）
/// - 在庫がなければ、利用者名があるときだけ待ちリストに登録
/// - 状態を変更したパスでのみカタログへ1回コミットする。
///   拒否パスではコミットは発生しない
///
/// 期待される失敗（タイトル不明・在庫なし）もストレージ障害も、
/// すべて`BorrowOutcome`の値として返す。この関数はErrを返さない。
/// 同一タイトルの操作はタイトルロックで直列化される。
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> BorrowOutcome {
    // 1. タイトルロックを取得（読み取り〜コミットを不可分にする）
    let _guard = deps.locks.acquire(&cmd.title).await;

    // 2. カタログからBookを検索
    let book = match deps.catalog.find_by_title(&cmd.title).await {
        Ok(Some(book)) => book,
        Ok(None) => return BorrowOutcome::Rejected(RejectReason::TitleNotFound),
        Err(error) => {
            tracing::error!(title = %cmd.title, "catalog lookup failed: {error}");
            return BorrowOutcome::Rejected(RejectReason::Storage(error.to_string()));
        }
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let (updated, event) = match domain::book::borrow_copy(&book, cmd.requester.as_ref()) {
        Ok(transition) => transition,
        Err(domain::BorrowError::NoneAvailable) => {
            return BorrowOutcome::Rejected(RejectReason::NoneAvailable);
        }
    };

    // 4. 変更後の状態をコミット
    if let Err(error) = deps.catalog.save(updated).await {
        tracing::error!(title = %cmd.title, "catalog commit failed: {error}");
        return BorrowOutcome::Rejected(RejectReason::Storage(error.to_string()));
    }

    // 5. イベントから結果を決定
    match event {
        domain::BorrowEvent::CopyLoaned(_) => BorrowOutcome::Loaned,
        domain::BorrowEvent::RequesterQueued(_) => BorrowOutcome::Queued,
    }
}

/// 書籍を返却する（純粋な関数）
///
/// ビジネスルール：
/// - タイトルはカタログに完全一致で存在すること
/// - 全冊が書架にある場合は受け付けない（在庫は元の冊数を超えない）
/// - 待ちリスト先頭の利用者がいれば空き通知を送る（fire-and-forget）
/// - 貸出数・人気カウントは変化しない
///
/// 通知はコミット成功後に送る。配信失敗は結果に影響させない。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> ReturnOutcome {
    // 1. タイトルロックを取得
    let _guard = deps.locks.acquire(&cmd.title).await;

    // 2. カタログからBookを検索
    let book = match deps.catalog.find_by_title(&cmd.title).await {
        Ok(Some(book)) => book,
        Ok(None) => return ReturnOutcome::Rejected(RejectReason::TitleNotFound),
        Err(error) => {
            tracing::error!(title = %cmd.title, "catalog lookup failed: {error}");
            return ReturnOutcome::Rejected(RejectReason::Storage(error.to_string()));
        }
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let (updated, event) = match domain::book::return_copy(&book) {
        Ok(transition) => transition,
        Err(domain::ReturnError::NoCopiesOnLoan) => {
            return ReturnOutcome::Rejected(RejectReason::NoCopiesOnLoan);
        }
    };

    // 4. 変更後の状態をコミット
    if let Err(error) = deps.catalog.save(updated).await {
        tracing::error!(title = %cmd.title, "catalog commit failed: {error}");
        return ReturnOutcome::Rejected(RejectReason::Storage(error.to_string()));
    }

    // 5. 待ちリスト先頭の利用者へ空き通知
    if let Some(requester) = event.notified {
        if let Err(error) = deps.notifier.notify_available(&event.title, &requester).await {
            tracing::warn!(title = %event.title, requester = %requester,
                "availability notification failed: {error}");
        }
        return ReturnOutcome::Returned {
            notified: Some(requester),
        };
    }

    ReturnOutcome::Returned { notified: None }
}
