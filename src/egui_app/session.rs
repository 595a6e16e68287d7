//! # Session Store
//!
//! Keeps the session token and the user id under the `token` and `userId`
//! keys of a small key-value store. The durable backend is a SQLite file in
//! the platform data directory; an in-memory backend exists for tests and
//! fixture runs.
//!
//! The store keeps a snapshot of both keys so the UI can read them without
//! awaiting. The snapshot only changes once the backend write succeeded.

use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::sync::Mutex;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::shared::types::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

/// Local storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to prepare storage directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UPSERT_SQL: &str = "INSERT INTO kv (key, value) VALUES (?, ?)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_SQL: &str = "DELETE FROM kv WHERE key = ?";

/// One change in a [`KeyValueStore::write_all`] batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write<'a> {
    Set { key: &'a str, value: &'a str },
    Remove(&'a str),
}

/// Asynchronous string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
    /// Apply every write or none of them
    fn write_all(&self, writes: &[Write<'_>]) -> impl Future<Output = Result<()>> + Send;
}

/// Durable backend on a SQLite file
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open or create the database at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query("PRAGMA synchronous=NORMAL").execute(&pool).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        tracing::debug!(path = %path.display(), "Session database ready");
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query(DELETE_SQL).bind(key).execute(&self.pool).await?;
        Ok(())
    }

    async fn write_all(&self, writes: &[Write<'_>]) -> Result<()> {
        // Dropping the transaction on error rolls it back
        let mut tx = self.pool.begin().await?;
        for write in writes {
            match *write {
                Write::Set { key, value } => {
                    sqlx::query(UPSERT_SQL)
                        .bind(key)
                        .bind(value)
                        .execute(&mut *tx)
                        .await?;
                }
                Write::Remove(key) => {
                    sqlx::query(DELETE_SQL).bind(key).execute(&mut *tx).await?;
                }
            }
        }
        tx.commit().await?;
        Ok(())
    }
}

/// Non-durable backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn write_all(&self, writes: &[Write<'_>]) -> Result<()> {
        let mut values = self.lock()?;
        for write in writes {
            match *write {
                Write::Set { key, value } => {
                    values.insert(key.to_string(), value.to_string());
                }
                Write::Remove(key) => {
                    values.remove(key);
                }
            }
        }
        Ok(())
    }
}

/// Backend chosen at startup
#[derive(Debug)]
pub enum Backend {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl Backend {
    /// SQLite at `path`, or memory when the file cannot be opened
    pub async fn open_or_memory(path: &Path) -> Self {
        match SqliteStore::open(path).await {
            Ok(store) => Backend::Sqlite(store),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Session database unavailable, using memory");
                Backend::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, Backend::Sqlite(_))
    }
}

impl KeyValueStore for Backend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Backend::Sqlite(store) => store.get(key).await,
            Backend::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Backend::Sqlite(store) => store.set(key, value).await,
            Backend::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match self {
            Backend::Sqlite(store) => store.remove(key).await,
            Backend::Memory(store) => store.remove(key).await,
        }
    }

    async fn write_all(&self, writes: &[Write<'_>]) -> Result<()> {
        match self {
            Backend::Sqlite(store) => store.write_all(writes).await,
            Backend::Memory(store) => store.write_all(writes).await,
        }
    }
}

/// Session token and user id on top of a [`KeyValueStore`]
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
    snapshot: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Load whatever session the backend already holds
    pub async fn open(backend: S) -> Result<Self> {
        let token = backend.get(TOKEN_KEY).await?.filter(|t| !t.is_empty());
        let user_id = backend.get(USER_ID_KEY).await?.filter(|id| !id.is_empty());
        tracing::info!(
            has_token = token.is_some(),
            has_user_id = user_id.is_some(),
            "Session loaded"
        );
        Ok(Self {
            backend,
            snapshot: Session { token, user_id },
        })
    }

    pub fn get_token(&self) -> Option<&str> {
        self.snapshot.token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.snapshot.user_id.as_deref()
    }

    pub fn snapshot(&self) -> &Session {
        &self.snapshot
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Store a signed-in session. Without a user id the stored one is kept.
    pub async fn set_session(&mut self, token: &str, user_id: Option<&str>) -> Result<()> {
        let mut writes = Vec::with_capacity(2);
        if let Some(id) = user_id {
            writes.push(Write::Set {
                key: USER_ID_KEY,
                value: id,
            });
        }
        writes.push(Write::Set {
            key: TOKEN_KEY,
            value: token,
        });
        self.backend.write_all(&writes).await?;

        self.snapshot.token = Some(token.to_string());
        if let Some(id) = user_id {
            self.snapshot.user_id = Some(id.to_string());
        }
        tracing::info!("Session stored");
        Ok(())
    }

    /// Registered but not yet verified: keep the user id, drop any token
    pub async fn remember_pending_user(&mut self, user_id: &str) -> Result<()> {
        self.backend
            .write_all(&[
                Write::Remove(TOKEN_KEY),
                Write::Set {
                    key: USER_ID_KEY,
                    value: user_id,
                },
            ])
            .await?;
        self.snapshot = Session {
            token: None,
            user_id: Some(user_id.to_string()),
        };
        Ok(())
    }

    pub async fn clear_session(&mut self) -> Result<()> {
        self.backend
            .write_all(&[Write::Remove(TOKEN_KEY), Write::Remove(USER_ID_KEY)])
            .await?;
        self.snapshot = Session::default();
        tracing::info!("Session cleared");
        Ok(())
    }
}
