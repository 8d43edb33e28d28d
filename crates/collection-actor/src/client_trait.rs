//! # ActorClient Trait
//!
//! Provides a common interface for record-specific clients, adding default `get`, `list` and
//! `delete` methods built on top of a generic `CollectionClient`.
use crate::{CollectionClient, CollectionEntity, FrameworkError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use collection_actor::{ActorClient, CollectionClient, CollectionEntity, FrameworkError};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u32, label: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TagError(String);
///
/// impl CollectionEntity for Tag {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Error = TagError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn next_id(tags: &[Self]) -> Result<u32, TagError> {
///         Ok(tags.iter().map(|t| t.id).max().unwrap_or(0) + 1)
///     }
///     fn from_create_params(id: u32, label: String) -> Result<Self, TagError> {
///         Ok(Self { id, label })
///     }
///     fn on_update(&mut self, label: String, _: &[Self]) -> Result<(), TagError> {
///         self.label = label;
///         Ok(())
///     }
/// }
///
/// struct TagClient {
///     inner: CollectionClient<Tag>,
/// }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &CollectionClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.list().await;
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: CollectionEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the specific record error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id; `Ok(None)` when absent.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
