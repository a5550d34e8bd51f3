use crate::domain::{BookTitle, Requester};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 空き通知ポート
///
/// 返却により書籍が利用可能になったことを、待ちリスト先頭の
/// 利用者へ知らせる配信メカニズムを抽象化する。
/// 配信はfire-and-forgetで、応答確認は行わない。
#[allow(dead_code)]
#[async_trait]
pub trait AvailabilityNotifier: Send + Sync {
    /// 書籍が利用可能になったことを利用者へ通知する
    ///
    /// CopyReturnedイベントが通知対象を運ぶ場合に呼ばれる。
    async fn notify_available(&self, title: &BookTitle, requester: &Requester) -> Result<()>;
}
