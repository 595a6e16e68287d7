//! Session store tests against a real SQLite file

use emarket::egui_app::session::{TOKEN_KEY, USER_ID_KEY};
use emarket::egui_app::{KeyValueStore, SessionStore, SqliteStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.db");

    let store = SqliteStore::open(&path).await.unwrap();
    let mut session = SessionStore::open(store).await.unwrap();
    session.set_session("T1", Some("u1")).await.unwrap();
    session.backend().close().await;

    let reopened = SessionStore::open(SqliteStore::open(&path).await.unwrap())
        .await
        .unwrap();
    assert_eq!(reopened.get_token(), Some("T1"));
    assert_eq!(reopened.user_id(), Some("u1"));
}

#[tokio::test]
async fn test_clear_session_removes_both_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.db");

    let mut session = SessionStore::open(SqliteStore::open(&path).await.unwrap())
        .await
        .unwrap();
    session.set_session("T1", Some("u1")).await.unwrap();
    session.clear_session().await.unwrap();

    assert_eq!(session.get_token(), None);
    assert_eq!(session.backend().get(TOKEN_KEY).await.unwrap(), None);
    assert_eq!(session.backend().get(USER_ID_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_pending_user_replaces_old_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.db");

    let mut session = SessionStore::open(SqliteStore::open(&path).await.unwrap())
        .await
        .unwrap();
    session.set_session("old", Some("u0")).await.unwrap();
    session.remember_pending_user("u1").await.unwrap();
    session.backend().close().await;

    let reopened = SessionStore::open(SqliteStore::open(&path).await.unwrap())
        .await
        .unwrap();
    assert_eq!(reopened.get_token(), None);
    assert_eq!(reopened.user_id(), Some("u1"));
    assert!(!reopened.snapshot().is_authenticated());
}

#[tokio::test]
async fn test_empty_stored_token_counts_as_signed_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.db");

    let store = SqliteStore::open(&path).await.unwrap();
    store.set(TOKEN_KEY, "").await.unwrap();

    let session = SessionStore::open(store).await.unwrap();
    assert_eq!(session.get_token(), None);
}
