//! Durable storage adapters for the cart snapshot.
//!
//! The cart occupies a single storage slot under a fixed key. Only the cart
//! store reads or writes it, so there is no concurrent-writer scenario within
//! one client. The serialized value carries no version field; rehydration in
//! [`super::store`] parses defensively instead.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Fixed key (file name) under which the cart snapshot is stored.
pub const CART_STORAGE_KEY: &str = "cart.json";

/// Errors surfaced by a storage adapter.
///
/// These never escape the cart store - both the read and the write path
/// degrade to a logged warning.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The storage slot cannot be used at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The durable client-side storage slot for the cart snapshot.
///
/// `load` returns `None` when no snapshot has ever been written; `save`
/// overwrites the slot wholesale.
pub trait CartStorage {
    /// Read the previously persisted snapshot, if any.
    fn load(&self) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite the slot with a new snapshot.
    fn save(&self, snapshot: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// File-backed storage: one JSON file under a fixed name in a configured
/// directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`; the snapshot lives at
    /// `dir/cart.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CART_STORAGE_KEY),
        }
    }

    /// The full path of the storage slot.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, snapshot).await?;
        Ok(())
    }
}

/// In-process storage for tests and ephemeral hosts.
///
/// Clones share the same slot, so a test can hold a handle to inspect what
/// the store wrote. Failure toggles make the degraded paths testable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<MemoryStorageInner>,
}

#[derive(Debug, Default)]
struct MemoryStorageInner {
    slot: Mutex<Option<String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot preloaded with a snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.lock_slot() = Some(snapshot.into());
        storage
    }

    /// Make subsequent `load` calls fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `save` calls fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Inspect the current slot contents.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.lock_slot().clone()
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.inner
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated read failure".into()));
        }
        Ok(self.lock_slot().clone())
    }

    async fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated write failure".into()));
        }
        *self.lock_slot() = Some(snapshot.to_owned());
        Ok(())
    }
}
