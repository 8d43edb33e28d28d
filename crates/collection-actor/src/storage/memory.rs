//! In-memory implementation of [`CollectionStorage`] for testing.

use super::CollectionStorage;
use crate::entity::CollectionEntity;
use crate::error::StorageError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory storage for testing.
///
/// Keeps the "persisted" collection in a shared `Vec`, avoiding file system I/O entirely.
/// All clones share the same underlying collection, so a test can keep one handle and
/// give another to the actor.
///
/// The save counter and write-failure switch let tests assert that a rejected operation
/// never reached storage, and exercise the error path of a failing backend.
#[derive(Debug)]
pub struct InMemoryStorage<T> {
    items: Arc<Mutex<Vec<T>>>,
    saves: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl<T> Clone for InMemoryStorage<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            saves: Arc::clone(&self.saves),
            fail_writes: Arc::clone(&self.fail_writes),
        }
    }
}

impl<T> Default for InMemoryStorage<T> {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl<T> InMemoryStorage<T> {
    /// Create an empty in-memory collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection that is already "persisted".
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            saves: Arc::new(AtomicUsize::new(0)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of successful `save_all` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// When set, every subsequent `save_all` fails with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> InMemoryStorage<T> {
    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().clone()
    }
}

#[async_trait]
impl<T: CollectionEntity> CollectionStorage<T> for InMemoryStorage<T> {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn load_all(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.snapshot())
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                operation: "write",
                path: PathBuf::from("memory"),
                source: std::io::Error::other("write failure injected"),
            });
        }
        *self.lock() = items.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
