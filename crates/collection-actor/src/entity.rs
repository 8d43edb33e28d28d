//! # CollectionEntity Trait
//!
//! The `CollectionEntity` trait defines the contract every record type must satisfy to be
//! managed by the generic [`CollectionActor`](crate::CollectionActor). It names the id and DTO
//! types and provides the pure rules the actor applies inside its load → compute → save cycle:
//! id generation, construction/validation, uniqueness checks and merges.
//!
//! # Architecture Note
//! The hooks are plain synchronous functions. They never perform I/O; they only see slices of
//! the collection the actor has already loaded. All I/O stays in the actor and the
//! [`CollectionStorage`](crate::storage::CollectionStorage) backend.
//!
//! # Provided Methods (Hooks)
//! - [`CollectionEntity::on_create`]
//! - [`CollectionEntity::on_delete`]
//!
//! The default implementations accept everything (`Ok(())`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `CollectionActor`.
///
/// Records are serialized as a whole collection, so the trait requires `Serialize` and
/// `DeserializeOwned` in addition to the usual `Clone + Debug + Send + Sync` actor bounds.
pub trait CollectionEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The store-assigned identifier for this record.
    type Id: Eq + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new record (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing record; usually a struct of `Option`s.
    type Update: Send + Sync + Debug + 'static;

    /// The error type for this record.
    ///
    /// One enum per entity, covering every rejection its hooks can produce.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;

    /// Computes the id for the next record given the current collection.
    ///
    /// Fails when the collection leaves no id to hand out; the create is rejected
    /// like any other hook failure.
    fn next_id(collection: &[Self]) -> Result<Self::Id, Self::Error>;

    /// Construct the full record from the assigned id and the payload.
    ///
    /// This is where field validation belongs; the payload is rejected before anything
    /// else is looked at.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called with the loaded collection before the new record is appended.
    fn on_create(&self, _existing: &[Self]) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merges `update` into the record. `others` is the collection without this record.
    fn on_update(&mut self, update: Self::Update, others: &[Self]) -> Result<(), Self::Error>;

    /// Called before the record is removed. `remaining` is the collection without it.
    fn on_delete(&self, _remaining: &[Self]) -> Result<(), Self::Error> {
        Ok(())
    }
}
