//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `CollectionClient<Product>` and exposes the store operations with
//! [`ProductError`] as the only error type.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use collection_actor::{ActorClient, CollectionClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: CollectionClient<Product>,
}

impl ProductClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// The full collection as currently persisted.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.list().await
    }

    /// Validates and stores a new product, returning it with its assigned id.
    #[instrument(skip(self))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Fetch a product, treating absence as [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Merges `update` into the product and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(ProductError::from)
    }

    /// Removes the product, or fails with [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.delete(id).await
    }
}
