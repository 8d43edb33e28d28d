//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `CollectionClient` and `CollectionActor`.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the operations of a collection store:
///
/// - **List**: Returns the whole collection as persisted.
/// - **Create**: Validates a [`CollectionEntity::Create`] payload, assigns an id, appends.
/// - **Get (Read)**: Linear scan by id.
/// - **Update**: Merges a [`CollectionEntity::Update`] payload into an existing record in place.
/// - **Delete**: Removes a record, keeping the order of the rest.
///
/// Every variant is handled as one complete load → compute → save cycle by the actor.
#[derive(Debug)]
pub enum CollectionRequest<T: CollectionEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
