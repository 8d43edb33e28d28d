//! JSON file implementation of [`CollectionStorage`].

use super::CollectionStorage;
use crate::entity::CollectionEntity;
use crate::error::StorageError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores a collection as a compact JSON array in a single file.
///
/// A missing file reads as an empty collection; the file is created by the first save.
/// Saves overwrite the whole file in one `write` call. Nothing locks the file, so two
/// processes sharing a path can still lose each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T: CollectionEntity> CollectionStorage<T> for JsonFileStorage {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_all(&self) -> Result<Vec<T>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(items).map_err(StorageError::Serialize)?;

        fs::write(&self.path, bytes)
            .await
            .map_err(|source| StorageError::Io {
                operation: "write",
                path: self.path.clone(),
                source,
            })
    }
}
