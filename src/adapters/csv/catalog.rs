use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Book, BookTitle, Requester, WaitingList};
use crate::ports::catalog::{Catalog as CatalogTrait, Result};

/// One row of books.csv
///
/// The waiting list is stored as a single `;`-separated column so the
/// whole catalog stays a flat CSV file.
#[derive(Debug, Serialize, Deserialize)]
struct BookRow {
    title: String,
    author: String,
    genre: String,
    year: u16,
    total_copies: u32,
    copies_available: u32,
    loaned_count: u32,
    popularity_count: u32,
    waiting_list: String,
}

impl BookRow {
    fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.value().to_string(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            year: book.year,
            total_copies: book.total_copies,
            copies_available: book.copies_available,
            loaned_count: book.loaned_count,
            popularity_count: book.popularity_count,
            waiting_list: book
                .waiting_list
                .iter()
                .map(|requester| requester.value())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }

    fn into_book(self) -> Result<Book> {
        let title = BookTitle::new(&self.title)
            .map_err(|e| format!("invalid title in books.csv: {e:?}"))?;

        let waiting_list: WaitingList = self
            .waiting_list
            .split(';')
            .filter(|name| !name.is_empty())
            .map(|name| {
                Requester::new(name).map_err(|e| format!("invalid requester in books.csv: {e:?}"))
            })
            .collect::<std::result::Result<_, _>>()?;

        Ok(Book {
            title,
            author: self.author,
            genre: self.genre,
            year: self.year,
            total_copies: self.total_copies,
            copies_available: self.copies_available,
            loaned_count: self.loaned_count,
            popularity_count: self.popularity_count,
            waiting_list,
        })
    }
}

/// CSV file implementation of Catalog
///
/// Loads the whole file at startup and keeps the books in memory;
/// every save/delete rewrites the file, which is the commit step.
/// In-process exclusion is handled with a mutex. Concurrent access
/// from multiple processes is not supported.
#[allow(dead_code)]
pub struct Catalog {
    path: PathBuf,
    books: Mutex<Vec<Book>>,
}

#[allow(dead_code)]
impl Catalog {
    /// Open a catalog backed by the given CSV file
    ///
    /// A missing file means an empty catalog; it is created on the
    /// first commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let books = if path.exists() {
            Self::load(&path)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            books: Mutex::new(books),
        })
    }

    fn load(path: &Path) -> Result<Vec<Book>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut books = Vec::new();
        for row in reader.deserialize::<BookRow>() {
            books.push(row?.into_book()?);
        }
        Ok(books)
    }

    /// Rewrite the whole file from the in-memory state
    fn commit(&self, books: &[Book]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for book in books {
            writer.serialize(BookRow::from_book(book))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl CatalogTrait for Catalog {
    /// Exact-match lookup by title
    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.iter().find(|book| &book.title == title).cloned())
    }

    /// Upsert one book and commit the whole catalog to disk
    async fn save(&self, book: Book) -> Result<()> {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|existing| existing.title == book.title) {
            Some(existing) => *existing = book,
            None => books.push(book),
        }
        self.commit(&books)
    }

    /// Remove one book and commit; returns whether it existed
    async fn delete(&self, title: &BookTitle) -> Result<bool> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| &book.title != title);
        let removed = books.len() < before;
        if removed {
            self.commit(&books)?;
        }
        Ok(removed)
    }

    async fn list_all(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.clone())
    }
}
