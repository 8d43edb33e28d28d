//! # Generic Actor Server
//!
//! This module defines the `CollectionActor`, the single writer for one persisted collection.
//! It implements the "Server" side of the Actor Model: it owns the storage backend and the
//! receiving end of the channel, and processes requests strictly one at a time.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::storage::CollectionStorage;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a persisted collection of records.
///
/// # Concurrency Model
/// The actor holds no state between requests; the storage backend is the only copy of the
/// collection. Every request runs one complete cycle:
///
/// 1. load the full collection,
/// 2. compute the answer or the new collection in memory,
/// 3. save the full collection back if it changed.
///
/// Because requests are processed sequentially, that cycle is a critical section. Two clients
/// inserting at the same time can never read the same max id, and an update can never be
/// clobbered by a write computed from stale data. No `Mutex` is needed: exclusive ownership of
/// the storage by the task gives the guarantee.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `CollectionActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client freely; drop every clone to stop the actor.
///
/// # Operations
///
/// * **List**: returns the loaded collection.
/// * **Create**: computes the next id, builds the record through
///   [`CollectionEntity::from_create_params`], runs [`CollectionEntity::on_create`] against the
///   loaded collection, appends, saves, returns the created record.
/// * **Get**: linear scan by id.
/// * **Update**: locates the record (or `NotFound`), takes it out of the collection, runs
///   [`CollectionEntity::on_update`] against the remaining records, puts it back at the same
///   position, saves, returns the updated record.
/// * **Delete**: locates the record (or `NotFound`), removes every record with that id, runs
///   [`CollectionEntity::on_delete`], saves the reduced collection.
///
/// A rejected hook or a failed load aborts the cycle before anything is saved.
pub struct CollectionActor<T: CollectionEntity, S: CollectionStorage<T>> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    storage: S,
}

impl<T: CollectionEntity, S: CollectionStorage<T>> CollectionActor<T, S> {
    /// Creates a new `CollectionActor` over `storage` and its associated `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - The backend holding the collection.
    pub fn new(buffer_size: usize, storage: S) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, storage };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_store::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let storage = self.storage.describe();
        info!(entity_type, %storage, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::List { respond_to } => {
                    debug!(entity_type, "List");
                    let result = self.storage.load_all().await.map_err(FrameworkError::from);
                    match &result {
                        Ok(items) => debug!(entity_type, size = items.len(), "Listed"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(entity_type, params).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Get { id, respond_to } => {
                    let result = self.get(&id).await;
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(entity_type, &id, update).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Update failed");
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(entity_type, &id).await;
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Delete failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, %storage, "Shutdown");
    }

    async fn create(&self, entity_type: &str, params: T::Create) -> Result<T, FrameworkError> {
        let mut items = self.storage.load_all().await?;

        let id = T::next_id(&items).map_err(entity_error)?;
        let item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(&items).map_err(entity_error)?;

        items.push(item.clone());
        self.storage.save_all(&items).await?;

        info!(entity_type, id = %item.id(), size = items.len(), "Created");
        Ok(item)
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>, FrameworkError> {
        let items = self.storage.load_all().await?;
        Ok(items.into_iter().find(|item| item.id() == id))
    }

    async fn update(
        &self,
        entity_type: &str,
        id: &T::Id,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        let mut items = self.storage.load_all().await?;
        let index = position(&items, id)?;

        // `items` holds every other record while the hook runs
        let mut item = items.remove(index);
        item.on_update(update, &items).map_err(entity_error)?;

        items.insert(index, item.clone());
        self.storage.save_all(&items).await?;

        info!(entity_type, %id, "Updated");
        Ok(item)
    }

    async fn delete(&self, entity_type: &str, id: &T::Id) -> Result<(), FrameworkError> {
        let mut items = self.storage.load_all().await?;
        let index = position(&items, id)?;

        // Every record carrying the id goes, not just the first
        let item = items.remove(index);
        items.retain(|other| other.id() != id);
        item.on_delete(&items).map_err(entity_error)?;

        self.storage.save_all(&items).await?;

        info!(entity_type, %id, size = items.len(), "Deleted");
        Ok(())
    }
}

fn position<T: CollectionEntity>(items: &[T], id: &T::Id) -> Result<usize, FrameworkError> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
