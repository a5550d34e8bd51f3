#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// 値オブジェクトの検証エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// タイトルが空
    EmptyTitle,
    /// 利用者名が空
    EmptyRequester,
}

/// 書籍タイトル - カタログ内で書籍を一意に識別するキー
///
/// 不変条件：空文字・空白のみのタイトルは存在しない。
/// 空タイトルは呼び出し側のバグであり、構築時点で弾く。
/// 貸出エンジンには常に有効なキーだけが渡される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for BookTitle {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 利用者名 - 借り手・待ちリスト登録者の識別子
///
/// 不変条件：空文字・空白のみの利用者名は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester(String);

impl Requester {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyRequester);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Requester {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: BookTitle のテスト
    #[test]
    fn test_book_title_new() {
        let title = BookTitle::new("Dune").unwrap();
        assert_eq!(title.value(), "Dune");
    }

    #[test]
    fn test_book_title_rejects_empty() {
        let result = BookTitle::new("");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn test_book_title_rejects_whitespace_only() {
        let result = BookTitle::new("   ");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn test_book_title_preserves_inner_whitespace() {
        let title = BookTitle::new("The Left Hand of Darkness").unwrap();
        assert_eq!(title.value(), "The Left Hand of Darkness");
    }

    #[test]
    fn test_book_title_try_from() {
        let title = BookTitle::try_from("Dune").unwrap();
        assert_eq!(title.value(), "Dune");
        assert!(BookTitle::try_from("").is_err());
    }

    // TDD: Requester のテスト
    #[test]
    fn test_requester_new() {
        let requester = Requester::new("alice").unwrap();
        assert_eq!(requester.value(), "alice");
    }

    #[test]
    fn test_requester_rejects_empty() {
        let result = Requester::new("");
        assert_eq!(result.unwrap_err(), ValidationError::EmptyRequester);
    }

    #[test]
    fn test_requester_equality() {
        let a = Requester::new("alice").unwrap();
        let b = Requester::new("alice").unwrap();
        assert_eq!(a, b);
    }
}
