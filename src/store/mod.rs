// Reading store access - the dashboard's view of the remote sensor database.

pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::Reading;

pub use postgres::PostgresStore;

/// Failure talking to the backing store.
///
/// A reachable-but-empty store is NOT an error: `fetch_latest` returns
/// `Ok(None)` and `fetch_history` an empty vec, so callers can tell
/// "no data yet" apart from a connectivity failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database URL: {0}")]
    InvalidUrl(String),
    #[error("TLS setup failed: {0}")]
    Tls(String),
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),
    #[error("store unavailable after {attempts} attempts: {last}")]
    Unavailable { attempts: usize, last: String },
}

/// Boundary to the external reading store.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// The most recent reading, or None when the store holds no data yet.
    async fn fetch_latest(&self) -> Result<Option<Reading>, StoreError>;

    /// Up to `limit` readings, most recent first.
    async fn fetch_history(&self, limit: usize) -> Result<Vec<Reading>, StoreError>;
}
