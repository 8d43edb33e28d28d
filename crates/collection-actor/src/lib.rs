//! # Collection Actor
//!
//! This crate provides the building blocks for a persisted record collection that is managed by a
//! single actor. It combines a **Resource-Oriented** CRUD surface with the **Actor Model** so that
//! the read-modify-write cycle against a flat file is safe for any number of concurrent callers in
//! the same process.
//!
//! ## Why an Actor?
//!
//! A file-backed collection has no concurrency control of its own: two tasks that both load the
//! file, modify it and write it back can interleave and lose updates. Routing every operation
//! through one task that owns the storage turns the whole cycle into a critical section.
//!
//! - Isolated ownership of the storage (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing eliminates the lost-update race
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`CollectionEntity`]) - Your record type and its rules
//! 2. **Storage Layer** ([`storage::CollectionStorage`]) - Whole-collection load/save
//! 3. **Runtime Layer** ([`CollectionActor`]) - Message processing and the load → compute → save cycle
//! 4. **Interface Layer** ([`CollectionClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use collection_actor::storage::InMemoryStorage;
//! use collection_actor::{CollectionActor, CollectionEntity};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { id: u32, label: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Empty label")]
//! struct EmptyLabel;
//!
//! impl CollectionEntity for Tag {
//!     type Id = u32;
//!     type Create = String;
//!     type Update = String;
//!     type Error = EmptyLabel;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn next_id(tags: &[Self]) -> Result<u32, EmptyLabel> {
//!         Ok(tags.iter().map(|t| t.id).max().unwrap_or(0) + 1)
//!     }
//!
//!     fn from_create_params(id: u32, label: String) -> Result<Self, EmptyLabel> {
//!         if label.is_empty() { return Err(EmptyLabel); }
//!         Ok(Self { id, label })
//!     }
//!
//!     fn on_update(&mut self, label: String, _others: &[Self]) -> Result<(), EmptyLabel> {
//!         self.label = label;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Create the actor over a storage backend
//!     let (actor, client) = CollectionActor::new(10, InMemoryStorage::<Tag>::new());
//!
//!     // 2. Spawn it
//!     let handle = tokio::spawn(actor.run());
//!
//!     // 3. Use the client
//!     let tag = client.create("rust".to_string()).await.unwrap();
//!     assert_eq!(tag.id, 1);
//!     assert!(client.create(String::new()).await.is_err());
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!
//!     // 4. Dropping the last client stops the actor
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! [`storage::InMemoryStorage`] runs the real actor without touching the file system, and the
//! [`mock`] module answers client requests from a queue of expectations without any actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::ActorClient;
pub use entity::CollectionEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{CollectionRequest, Response};
