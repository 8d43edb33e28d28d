//! Product record and its DTOs.
//!
//! [`Product`] implements the [`CollectionEntity`](collection_actor::CollectionEntity) trait
//! (see [`crate::product_actor::entity`]), allowing it to be managed by a
//! [`CollectionActor`](collection_actor::CollectionActor).
//!
//! - Creation parameters: [`ProductCreate`]
//! - Update parameters: [`ProductUpdate`]

use crate::product_actor::ProductError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for Products. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted product record. Field order matches the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    /// Business key, unique across the collection.
    pub code: String,
    /// Quantity on hand. Any finite number, including fractions and negatives.
    pub stock: f64,
}

/// Payload for creating a new product. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: f64,
}

impl ProductCreate {
    /// Convenience constructor taking the six caller-supplied fields in file order.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }
}

/// Partial update; `None` leaves the field as it is.
///
/// There is deliberately no `id` field: a product's id cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<f64>,
}

impl Product {
    /// Builds the stored record from an assigned id and a creation payload.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            price: params.price,
            thumbnail: params.thumbnail,
            code: params.code,
            stock: params.stock,
        }
    }

    /// Overwrites every field present in `update`. The id is never touched.
    pub fn merge(&mut self, update: ProductUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(thumbnail) = update.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
    }
}

// Untyped input (e.g. a request body). Missing or mistyped fields are validation errors;
// unknown keys, including a caller-supplied `id`, are ignored.

impl TryFrom<serde_json::Value> for ProductCreate {
    type Error = ProductError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|e| ProductError::Validation(e.to_string()))
    }
}

impl TryFrom<serde_json::Value> for ProductUpdate {
    type Error = ProductError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|e| ProductError::Validation(e.to_string()))
    }
}
