use crate::domain::{Book, BookTitle};
use crate::ports::catalog::{Catalog as CatalogTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of Catalog
///
/// Keeps books in memory to support stateful testing.
/// Lookup and commit failures can be injected to exercise the
/// storage-fault paths, and commits are counted so tests can assert
/// that rejection paths never commit.
#[allow(dead_code)]
pub struct Catalog {
    books: Mutex<Vec<Book>>,
    fail_finds: Mutex<bool>,
    fail_saves: Mutex<bool>,
    save_count: Mutex<usize>,
}

#[allow(dead_code)]
impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
            fail_finds: Mutex::new(false),
            fail_saves: Mutex::new(false),
            save_count: Mutex::new(0),
        }
    }

    /// Seed a book for testing purposes
    pub fn add_book(&self, book: Book) {
        self.books.lock().unwrap().push(book);
    }

    /// Make every subsequent lookup fail
    pub fn fail_finds(&self, fail: bool) {
        *self.fail_finds.lock().unwrap() = fail;
    }

    /// Make every subsequent commit fail
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Number of successful commits so far
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    /// Current state of a book, bypassing the port
    pub fn get(&self, title: &BookTitle) -> Option<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|book| &book.title == title)
            .cloned()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogTrait for Catalog {
    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>> {
        if *self.fail_finds.lock().unwrap() {
            return Err("injected catalog lookup failure".into());
        }
        Ok(self.get(title))
    }

    async fn save(&self, book: Book) -> Result<()> {
        if *self.fail_saves.lock().unwrap() {
            return Err("injected catalog commit failure".into());
        }
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|existing| existing.title == book.title) {
            Some(existing) => *existing = book,
            None => books.push(book),
        }
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }

    async fn delete(&self, title: &BookTitle) -> Result<bool> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| &book.title != title);
        Ok(books.len() < before)
    }

    async fn list_all(&self) -> Result<Vec<Book>> {
        if *self.fail_finds.lock().unwrap() {
            return Err("injected catalog lookup failure".into());
        }
        Ok(self.books.lock().unwrap().clone())
    }
}
