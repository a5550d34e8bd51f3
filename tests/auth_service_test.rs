use rusty_catalog_ddd::adapters::mock::user_store::UserStore as MockUserStore;
use rusty_catalog_ddd::application::auth::{
    LoginOutcome, RegisterOutcome, hash_password, login, register,
};
use rusty_catalog_ddd::ports::user_store::{UserRecord, UserStore};
use std::sync::Arc;

fn store() -> (Arc<MockUserStore>, Arc<dyn UserStore>) {
    let mock = Arc::new(MockUserStore::new());
    let users: Arc<dyn UserStore> = mock.clone();
    (mock, users)
}

#[tokio::test]
async fn test_register_new_user() {
    // Arrange
    let (mock, users) = store();

    // Act
    let outcome = register(&users, "test_user", "test_password").await.unwrap();

    // Assert: 登録され、ハッシュのみが保存される
    assert_eq!(outcome, RegisterOutcome::Registered);
    let records = mock.users();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "test_user");
    assert_eq!(records[0].password_hash, hash_password("test_password"));
    assert_ne!(records[0].password_hash, "test_password");
}

#[tokio::test]
async fn test_register_existing_user_rejected() {
    // Arrange: 既存ユーザー
    let (mock, users) = store();
    mock.add_user(UserRecord {
        username: "test_user".to_string(),
        password_hash: hash_password("test_password"),
    });

    // Act
    let outcome = register(&users, "test_user", "new_password").await.unwrap();

    // Assert: 拒否され、レコードは増えない
    assert_eq!(outcome, RegisterOutcome::UsernameTaken);
    assert_eq!(mock.users().len(), 1);
}

#[tokio::test]
async fn test_login_successful() {
    let (mock, users) = store();
    mock.add_user(UserRecord {
        username: "test_user".to_string(),
        password_hash: hash_password("test_password"),
    });

    let outcome = login(&users, "test_user", "test_password").await.unwrap();

    assert_eq!(outcome, LoginOutcome::LoggedIn);
}

#[tokio::test]
async fn test_login_failed() {
    let (mock, users) = store();
    mock.add_user(UserRecord {
        username: "test_user".to_string(),
        password_hash: hash_password("test_password"),
    });

    // 不正なユーザー名
    let outcome = login(&users, "wrong_user", "test_password").await.unwrap();
    assert_eq!(outcome, LoginOutcome::InvalidCredentials);

    // 不正なパスワード
    let outcome = login(&users, "test_user", "wrong_password").await.unwrap();
    assert_eq!(outcome, LoginOutcome::InvalidCredentials);
}

#[tokio::test]
async fn test_store_fault_propagates_as_error() {
    let (mock, users) = store();
    mock.fail_all(true);

    assert!(register(&users, "test_user", "pw").await.is_err());
    assert!(login(&users, "test_user", "pw").await.is_err());
}
