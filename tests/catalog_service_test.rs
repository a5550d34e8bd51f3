use rusty_catalog_ddd::adapters::mock::catalog::Catalog as MockCatalog;
use rusty_catalog_ddd::application::catalog::{
    AddBookOutcome, RemoveBookOutcome, add_book, remove_book,
};
use rusty_catalog_ddd::domain::{Book, BookTitle};
use rusty_catalog_ddd::ports::catalog::Catalog;
use std::sync::Arc;

fn title(value: &str) -> BookTitle {
    BookTitle::new(value).unwrap()
}

fn dune() -> Book {
    Book::new(title("Dune"), "Frank Herbert", "Science Fiction", 1965, 2)
}

#[tokio::test]
async fn test_add_book_success() {
    let mock = Arc::new(MockCatalog::new());
    let catalog: Arc<dyn Catalog> = mock.clone();

    let outcome = add_book(&catalog, dune()).await.unwrap();

    assert_eq!(outcome, AddBookOutcome::Added);
    assert!(mock.get(&title("Dune")).is_some());
}

#[tokio::test]
async fn test_add_book_duplicate_title_rejected() {
    let mock = Arc::new(MockCatalog::new());
    let catalog: Arc<dyn Catalog> = mock.clone();
    add_book(&catalog, dune()).await.unwrap();

    let outcome = add_book(&catalog, dune()).await.unwrap();

    assert_eq!(outcome, AddBookOutcome::DuplicateTitle);
    assert_eq!(catalog.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_book_success() {
    let mock = Arc::new(MockCatalog::new());
    let catalog: Arc<dyn Catalog> = mock.clone();
    add_book(&catalog, dune()).await.unwrap();

    let outcome = remove_book(&catalog, &title("Dune")).await.unwrap();

    assert_eq!(outcome, RemoveBookOutcome::Removed);
    assert!(mock.get(&title("Dune")).is_none());
}

#[tokio::test]
async fn test_remove_unknown_title_rejected() {
    let mock = Arc::new(MockCatalog::new());
    let catalog: Arc<dyn Catalog> = mock.clone();

    let outcome = remove_book(&catalog, &title("Unknown")).await.unwrap();

    assert_eq!(outcome, RemoveBookOutcome::TitleNotFound);
}
