pub mod tables;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableTable};
use serde_json::Value;
use thiserror::Error;

use crate::constants::TIMESTAMP_FIELD;

/// Database handle type (Arc-wrapped for sharing across handlers)
pub type Db = Arc<Database>;

/// A schema-less document: an arbitrary mapping of field names to values
pub type Document = serde_json::Map<String, Value>;

/// Store error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

/// Outcome of a successful append
#[derive(Debug, Clone, Copy)]
pub struct WriteReceipt {
    /// Document id assigned by the store
    pub id: u64,
    /// Creation time assigned by the store at commit (Unix seconds)
    pub written_at: i64,
}

impl WriteReceipt {
    /// The store-assigned creation time as an RFC3339 string
    pub fn written_at_rfc3339(&self) -> String {
        DateTime::from_timestamp(self.written_at, 0)
            .unwrap_or_else(Utc::now)
            .to_rfc3339()
    }
}

/// The single store operation this service depends on.
///
/// Handlers receive an explicitly constructed store rather than reaching
/// for ambient state, so tests can substitute an in-memory double.
pub trait DocumentStore {
    /// Append one document to the named collection.
    ///
    /// The store assigns the `timestamp` field at write time; a
    /// caller-supplied value for it is discarded.
    fn append(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<WriteReceipt, StoreError>> + Send;
}

/// Embedded document store backed by redb, one table per collection
#[derive(Clone)]
pub struct RedbStore {
    db: Db,
}

impl RedbStore {
    /// Wrap an already-open database handle
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Check that the database accepts read transactions
    pub async fn ping(&self) -> bool {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.begin_read().is_ok())
            .await
            .unwrap_or(false)
    }
}

impl DocumentStore for RedbStore {
    async fn append(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<WriteReceipt, StoreError> {
        let table = tables::for_collection(collection)
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))?;

        let db = self.db.clone();
        tokio::task::spawn_blocking(move || -> Result<WriteReceipt, StoreError> {
            // Timestamp is assigned here, at write time, never by the caller
            let written_at = Utc::now().timestamp();
            document.insert(TIMESTAMP_FIELD.to_string(), Value::from(written_at));
            let bytes = serde_json::to_vec(&document)?;

            let write_txn = db.begin_write()?;
            let id;
            {
                let mut documents = write_txn.open_table(table)?;
                id = documents
                    .last()?
                    .map(|(key, _)| key.value() + 1)
                    .unwrap_or(0);
                documents.insert(id, bytes.as_slice())?;
            }
            write_txn.commit()?;

            Ok(WriteReceipt { id, written_at })
        })
        .await?
    }
}

/// Open or create the document store at the given path
///
/// Creates all collection tables on first run.
pub fn open_store(path: impl AsRef<Path>) -> Result<RedbStore, StoreError> {
    tracing::info!("Opening document store at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create store directory: {}", e);
                e
            })?;
        }
    }

    let db = Database::create(path)?;

    // Initialize collection tables on first run
    let write_txn = db.begin_write()?;
    {
        let _ = write_txn.open_table(tables::DONATIONS)?;
        let _ = write_txn.open_table(tables::NGO_REQUESTS)?;
    }
    write_txn.commit()?;

    tracing::info!("Document store initialized");

    Ok(RedbStore::new(Arc::new(db)))
}
