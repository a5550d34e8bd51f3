use rusty_catalog_ddd::adapters::csv::catalog::Catalog as CsvCatalog;
use rusty_catalog_ddd::adapters::csv::user_store::UserStore as CsvUserStore;
use rusty_catalog_ddd::adapters::fs::action_log::ActionLog as FileActionLog;
use rusty_catalog_ddd::application::auth::{LoginOutcome, hash_password, login};
use rusty_catalog_ddd::domain::book::borrow_copy;
use rusty_catalog_ddd::domain::{Book, BookTitle, Requester};
use rusty_catalog_ddd::ports::action_log::ActionLog;
use rusty_catalog_ddd::ports::catalog::Catalog;
use rusty_catalog_ddd::ports::user_store::{UserRecord, UserStore};
use std::path::PathBuf;
use std::sync::Arc;

/// テストごとに一意なファイルパス（プロセスIDとテスト名で分離）
fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "rusty_catalog_test_{}_{}.csv",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn title(value: &str) -> BookTitle {
    BookTitle::new(value).unwrap()
}

fn requester(name: &str) -> Requester {
    Requester::new(name).unwrap()
}

// ============================================================================
// CsvCatalog
// ============================================================================

#[tokio::test]
async fn test_catalog_missing_file_means_empty() {
    let path = temp_path("catalog_empty");

    let catalog = CsvCatalog::open(&path).unwrap();

    assert!(catalog.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_catalog_round_trip_preserves_state() {
    let path = temp_path("catalog_round_trip");

    // Arrange: 貸出状態と待ちリストを持つBookを保存する
    let book = Book::new(title("Dune"), "Frank Herbert", "Science Fiction", 1965, 2);
    let (book, _) = borrow_copy(&book, None).unwrap();
    let (book, _) = borrow_copy(&book, None).unwrap();
    let (book, _) = borrow_copy(&book, Some(&requester("alice"))).unwrap();
    let (book, _) = borrow_copy(&book, Some(&requester("bob"))).unwrap();

    {
        let catalog = CsvCatalog::open(&path).unwrap();
        catalog.save(book.clone()).await.unwrap();
    }

    // Act: 開き直す
    let reopened = CsvCatalog::open(&path).unwrap();
    let loaded = reopened.find_by_title(&title("Dune")).await.unwrap().unwrap();

    // Assert: カウンタも待ちリストの順序も保存されている
    assert_eq!(loaded, book);
    assert_eq!(loaded.copies_available, 0);
    assert_eq!(loaded.loaned_count, 2);
    assert_eq!(loaded.popularity_count, 2);
    let waiting: Vec<_> = loaded.waiting_list.iter().cloned().collect();
    assert_eq!(waiting, vec![requester("alice"), requester("bob")]);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_catalog_delete_persists() {
    let path = temp_path("catalog_delete");

    {
        let catalog = CsvCatalog::open(&path).unwrap();
        catalog
            .save(Book::new(title("Dune"), "Frank Herbert", "Science Fiction", 1965, 1))
            .await
            .unwrap();
        catalog
            .save(Book::new(title("The Hobbit"), "J.R.R. Tolkien", "Fantasy", 1937, 1))
            .await
            .unwrap();

        assert!(catalog.delete(&title("Dune")).await.unwrap());
        assert!(!catalog.delete(&title("Dune")).await.unwrap());
    }

    let reopened = CsvCatalog::open(&path).unwrap();
    let books = reopened.list_all().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, title("The Hobbit"));

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// CsvUserStore
// ============================================================================

#[tokio::test]
async fn test_user_store_seeds_default_admin() {
    let path = temp_path("users_seed");

    let store = CsvUserStore::open(&path).unwrap();

    // 既定管理者でログインできる
    let admin = store.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.password_hash, hash_password("admin123"));

    let users: Arc<dyn UserStore> = Arc::new(store);
    let outcome = login(&users, "admin", "admin123").await.unwrap();
    assert_eq!(outcome, LoginOutcome::LoggedIn);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_user_store_does_not_reseed_existing_store() {
    let path = temp_path("users_no_reseed");

    {
        let store = CsvUserStore::open(&path).unwrap();
        store
            .insert(UserRecord {
                username: "staff".to_string(),
                password_hash: hash_password("pw"),
            })
            .await
            .unwrap();
    }

    // Act: 開き直しても管理者が二重に入らない
    let reopened = CsvUserStore::open(&path).unwrap();

    assert!(reopened.find_by_username("staff").await.unwrap().is_some());
    let admin = reopened.find_by_username("admin").await.unwrap();
    assert!(admin.is_some());

    let _ = std::fs::remove_file(&path);
}

// ============================================================================
// FileActionLog
// ============================================================================

#[tokio::test]
async fn test_action_log_appends_lines_in_order() {
    let path = temp_path("action_log");

    let log = FileActionLog::open(&path).unwrap();
    log.append("book borrowed successfully").await.unwrap();
    log.append("book returned fail").await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "book borrowed successfully\nbook returned fail\n");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_action_log_reopen_appends_instead_of_truncating() {
    let path = temp_path("action_log_reopen");

    {
        let log = FileActionLog::open(&path).unwrap();
        log.append("registered successfully").await.unwrap();
    }
    {
        let log = FileActionLog::open(&path).unwrap();
        log.append("logged in successfully").await.unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "registered successfully\nlogged in successfully\n");

    let _ = std::fs::remove_file(&path);
}
