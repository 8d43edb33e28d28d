//! # Framework Errors
//!
//! This module defines the common error types used throughout the collection actor.
//! Storage failures and framework failures are kept apart from entity errors so that a
//! domain client can tell "the file could not be read" from "the record was rejected".

use std::path::PathBuf;

/// Errors raised by a [`CollectionStorage`](crate::storage::CollectionStorage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to {operation} {path:?}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed collection in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the variant is something else or the boxed
    /// error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
