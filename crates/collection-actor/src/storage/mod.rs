//! # Storage Backends
//!
//! A [`CollectionStorage`] is the only thing a [`CollectionActor`](crate::CollectionActor) knows
//! about persistence: two I/O primitives that read and write the *whole* collection.
//! There is no partial read, no append and no patching; every mutation rewrites everything.
//!
//! - [`JsonFileStorage`] - a flat JSON array in a single file.
//! - [`InMemoryStorage`] - a shared in-memory vector for fast, isolated tests.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::InMemoryStorage;

use crate::entity::CollectionEntity;
use crate::error::StorageError;
use async_trait::async_trait;

/// Port for loading and saving a complete collection.
#[async_trait]
pub trait CollectionStorage<T: CollectionEntity>: Send + Sync + 'static {
    /// Short human-readable description used in logs (e.g. the file path).
    fn describe(&self) -> String;

    /// Loads the full collection. A collection that was never saved is empty.
    async fn load_all(&self) -> Result<Vec<T>, StorageError>;

    /// Replaces the persisted collection with `items`.
    async fn save_all(&self, items: &[T]) -> Result<(), StorageError>;
}
