//! Pure data structures (DTOs) implementing the [`CollectionEntity`](collection_actor::CollectionEntity) trait.

pub mod product;

pub use product::*;
