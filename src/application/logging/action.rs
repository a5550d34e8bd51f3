use crate::application::search::SearchField;

/// 記録対象の操作
///
/// ログ行のラベルと、検索系操作の専用テンプレートに必要な文脈
/// （クエリ・検索フィールド）を保持する。操作自身はログの存在を
/// 知らない。呼び出し側がこの記述子を添えてインターセプタへ渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddBook,
    RemoveBook,
    BorrowBook,
    ReturnBook,
    Register,
    Login,
    DisplayPopular,
    Search { query: String, field: SearchField },
}

impl Action {
    /// 成功・失敗行に使う操作ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddBook => "book added",
            Action::RemoveBook => "book removed",
            Action::BorrowBook => "book borrowed",
            Action::ReturnBook => "book returned",
            Action::Register => "registered",
            Action::Login => "logged in",
            Action::DisplayPopular => "Popular books display",
            Action::Search { .. } => "Search book",
        }
    }

    /// 障害行（failed: ...）に使う操作名
    pub fn fault_label(&self) -> &'static str {
        match self {
            Action::AddBook => "Add Book",
            Action::RemoveBook => "Remove Book",
            Action::BorrowBook => "Borrow Book",
            Action::ReturnBook => "Return Book",
            Action::Register => "Register",
            Action::Login => "Login",
            Action::DisplayPopular => "Display Popular Books",
            Action::Search { .. } => "Perform Search",
        }
    }
}
