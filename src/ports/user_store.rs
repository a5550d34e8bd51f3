use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 利用者レコード（認証用）
///
/// パスワードはSHA-256ハッシュの16進文字列のみ保持する。
/// 平文パスワードは保存されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// 利用者ストアポート
///
/// 認証コンテキストと利用者永続化の境界を維持する。
#[allow(dead_code)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ユーザー名でレコードを検索する
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    /// 新しいレコードを追加し、コミットする
    ///
    /// ユーザー名の一意性チェックは呼び出し側（認証サービス）の責務。
    async fn insert(&self, user: UserRecord) -> Result<()>;
}
