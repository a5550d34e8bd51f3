use std::sync::Arc;

use crate::domain::Book;
use crate::ports::catalog::Catalog;

use super::errors::{Result, SearchError};

/// 人気一覧の最大表示件数
const POPULAR_DISPLAY_LIMIT: usize = 10;

/// 検索フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
    Year,
    CopiesAvailable,
}

impl SearchField {
    /// フィールド名の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
            SearchField::Year => "year",
            SearchField::CopiesAvailable => "copies_available",
        }
    }

    /// 操作ログに記録されるフィールド名
    ///
    /// titleは歴代のログ形式との互換でnameと記録される。
    pub fn log_label(&self) -> &'static str {
        match self {
            SearchField::Title => "name",
            other => other.as_str(),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            "year" => Ok(SearchField::Year),
            "copies_available" => Ok(SearchField::CopiesAvailable),
            other => Err(SearchError::UnknownField(other.to_string())),
        }
    }
}

/// 一覧フィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFilter {
    /// 全件
    All,
    /// 人気カウントが1以上の書籍を人気順に最大10件
    Popular,
    /// 在庫が1冊以上
    Available,
    /// 全冊貸出中
    Loaned,
}

impl std::str::FromStr for DisplayFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(DisplayFilter::All),
            "popular" => Ok(DisplayFilter::Popular),
            "available" => Ok(DisplayFilter::Available),
            "loaned" => Ok(DisplayFilter::Loaned),
            other => Err(SearchError::UnknownFilter(other.to_string())),
        }
    }
}

/// 書籍を検索する（純粋な関数）
///
/// ビジネスルール：
/// - タイトル・著者・ジャンルは大文字小文字を無視した部分一致
/// - 出版年・在庫数はクエリを数値として解釈した完全一致
///
/// 数値フィールドに数値でないクエリが渡された場合はエラー
/// （呼び出し側の入力ミスとして表面化させる）。
pub async fn perform_search(
    catalog: &Arc<dyn Catalog>,
    query: &str,
    field: SearchField,
) -> Result<Vec<Book>> {
    let books = catalog.list_all().await.map_err(SearchError::CatalogError)?;

    let matches = match field {
        SearchField::Title => filter_contains(books, query, |b| b.title.value()),
        SearchField::Author => filter_contains(books, query, |b| b.author.as_str()),
        SearchField::Genre => filter_contains(books, query, |b| b.genre.as_str()),
        SearchField::Year => {
            let year: u16 = query
                .parse()
                .map_err(|_| SearchError::InvalidQuery(query.to_string()))?;
            books.into_iter().filter(|b| b.year == year).collect()
        }
        SearchField::CopiesAvailable => {
            let copies: u32 = query
                .parse()
                .map_err(|_| SearchError::InvalidQuery(query.to_string()))?;
            books
                .into_iter()
                .filter(|b| b.copies_available == copies)
                .collect()
        }
    };

    Ok(matches)
}

fn filter_contains(books: Vec<Book>, query: &str, key: impl Fn(&Book) -> &str) -> Vec<Book> {
    let query = query.to_lowercase();
    books
        .into_iter()
        .filter(|book| key(book).to_lowercase().contains(&query))
        .collect()
}

/// フィルタ付きで書籍一覧を返す（純粋な関数）
///
/// popularの並び順は人気カウント降順。同数の場合の順序は
/// カタログの並び順に従う（安定ソート）。
pub async fn display_books(
    catalog: &Arc<dyn Catalog>,
    filter: DisplayFilter,
) -> Result<Vec<Book>> {
    let books = catalog.list_all().await.map_err(SearchError::CatalogError)?;

    let filtered = match filter {
        DisplayFilter::All => books,
        DisplayFilter::Popular => {
            let mut popular: Vec<Book> = books
                .into_iter()
                .filter(|b| b.popularity_count > 0)
                .collect();
            popular.sort_by(|a, b| b.popularity_count.cmp(&a.popularity_count));
            popular.truncate(POPULAR_DISPLAY_LIMIT);
            popular
        }
        DisplayFilter::Available => books.into_iter().filter(|b| !b.is_loaned()).collect(),
        DisplayFilter::Loaned => books.into_iter().filter(|b| b.is_loaned()).collect(),
    };

    Ok(filtered)
}
