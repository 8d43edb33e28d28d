//! # Product Store Library
//!
//! A persisted collection of product records, managed by a single
//! [`CollectionActor`](collection_actor::CollectionActor) over a flat JSON file.
//!
//! ## Core Components
//!
//! - **[model]**: [`Product`](model::Product) and its create/update payloads.
//! - **[product_actor]**: Validation, `code` uniqueness and id generation, plus the factories.
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the typed store API.
//! - **[config]**: [`StoreConfig`](config::StoreConfig), read from the environment.
//! - **[lifecycle]**: [`ProductSystem`](lifecycle::ProductSystem) starts and stops the actor.
//!
//! ## Quick Start
//!
//! ```rust
//! use product_store::config::StoreConfig;
//! use product_store::lifecycle::ProductSystem;
//! use product_store::model::{ProductCreate, ProductUpdate};
//! use product_store::product_actor::ProductError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dir = tempfile::tempdir()?;
//!     let system = ProductSystem::open(&StoreConfig::new(dir.path().join("products.json")));
//!     let products = &system.product_client;
//!
//!     let created = products
//!         .add_product(ProductCreate::new("A", "d", 10.0, "t", "C1", 3.0))
//!         .await?;
//!     assert_eq!(created.id.0, 1);
//!
//!     let duplicate = products
//!         .add_product(ProductCreate::new("B", "d", 5.0, "t", "C1", 1.0))
//!         .await;
//!     assert_eq!(duplicate, Err(ProductError::DuplicateCode("C1".to_string())));
//!
//!     let update = ProductUpdate { price: Some(12.0), ..Default::default() };
//!     assert_eq!(products.update_product(created.id, update).await?.price, 12.0);
//!
//!     products.delete_product(created.id).await?;
//!     assert!(products.list_products().await?.is_empty());
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
