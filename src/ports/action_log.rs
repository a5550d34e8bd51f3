use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 操作ログポート
///
/// すべての変更系操作の成否を1呼び出し1行で記録する、
/// 追記専用のUTF-8テキストシンク。
#[allow(dead_code)]
#[async_trait]
pub trait ActionLog: Send + Sync {
    /// 整形済みのログ行を追記する
    ///
    /// `line`は末尾の改行を含まない。改行と書き込み順序の
    /// 保証はシンク実装の責務。
    async fn append(&self, line: &str) -> Result<()>;
}
