use crate::domain::{Book, BookTitle};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログポート
///
/// 貸出コンテキストと書籍カタログの境界を維持する。
/// Bookの検索と、変更後の状態のコミット（永続化）を抽象化する。
#[allow(dead_code)]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// タイトル完全一致でBookを検索する
    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>>;

    /// Bookの状態を保存し、バッキングストアへコミットする
    ///
    /// 貸出エンジンは状態を変更したパスでのみ、1呼び出しにつき
    /// 1回だけ呼ぶ。拒否パスではコミットは発生しない。
    async fn save(&self, book: Book) -> Result<()>;

    /// タイトルでBookを削除する
    ///
    /// 存在した場合はtrueを返す。
    async fn delete(&self, title: &BookTitle) -> Result<bool>;

    /// 全Bookを返す
    ///
    /// 検索・一覧表示に使用される。
    async fn list_all(&self) -> Result<Vec<Book>>;
}
