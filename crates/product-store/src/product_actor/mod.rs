//! # Product Actor
//!
//! Wires the [`Product`] record into a [`CollectionActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`CollectionEntity`](collection_actor::CollectionEntity) implementation for
//!   [`Product`]: field validation, `code` uniqueness, id generation, merge on update
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] / [`open()`] - Factory functions that create the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use collection_actor::storage::InMemoryStorage;
//! use product_store::model::ProductCreate;
//! use product_store::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(InMemoryStorage::new(), 8);
//!     tokio::spawn(actor.run());
//!
//!     let product = client
//!         .add_product(ProductCreate::new("A", "d", 10.0, "t", "C1", 3.0))
//!         .await?;
//!     assert_eq!(product.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::config::StoreConfig;
use crate::model::Product;
use collection_actor::storage::{CollectionStorage, JsonFileStorage};
use collection_actor::CollectionActor;

/// Creates a new Product actor over `storage` and its client.
pub fn new<S>(storage: S, buffer_size: usize) -> (CollectionActor<Product, S>, ProductClient)
where
    S: CollectionStorage<Product>,
{
    let (actor, generic_client) = CollectionActor::new(buffer_size, storage);
    let client = ProductClient::new(generic_client);

    (actor, client)
}

/// Creates a Product actor backed by the JSON file named in `config`.
///
/// The file is not touched until the first request.
pub fn open(config: &StoreConfig) -> (CollectionActor<Product, JsonFileStorage>, ProductClient) {
    new(JsonFileStorage::new(&config.path), config.buffer_size)
}
