//! [`CollectionEntity`] implementation for the Product domain type.
//!
//! The hooks are pure: they see the collection the actor just loaded and decide whether the
//! change is allowed. The actor persists only when every hook returns `Ok`.

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use collection_actor::CollectionEntity;

impl CollectionEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn next_id(products: &[Self]) -> Result<ProductId, ProductError> {
        generate_id(products)
    }

    /// Validates every caller-supplied field and builds the record.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let product = Product::new(id, params);
        validate_fields(&product)?;
        Ok(product)
    }

    /// Rejects a `code` already present in the collection.
    fn on_create(&self, existing: &[Self]) -> Result<(), ProductError> {
        if !is_code_unique(&self.code, existing) {
            return Err(ProductError::DuplicateCode(self.code.clone()));
        }
        Ok(())
    }

    /// Merges the present fields over this record.
    ///
    /// `others` excludes this record, so keeping the current `code` is not a collision.
    /// The merged record is validated again before it replaces the current one.
    fn on_update(&mut self, update: ProductUpdate, others: &[Self]) -> Result<(), ProductError> {
        if let Some(code) = &update.code {
            if !is_code_unique(code, others) {
                return Err(ProductError::DuplicateCode(code.clone()));
            }
        }

        let mut merged = self.clone();
        merged.merge(update);
        validate_fields(&merged)?;

        *self = merged;
        Ok(())
    }
}

/// `1 + max(existing ids)`, or `1` for an empty collection.
///
/// Fails with [`ProductError::IdsExhausted`] once `u32::MAX` is in use.
pub fn generate_id(products: &[Product]) -> Result<ProductId, ProductError> {
    let max = products.iter().map(|p| p.id.0).max().unwrap_or(0);
    max.checked_add(1)
        .map(ProductId)
        .ok_or(ProductError::IdsExhausted(ProductId(max)))
}

/// `true` when no product in `products` uses `code`.
pub fn is_code_unique(code: &str, products: &[Product]) -> bool {
    !products.iter().any(|p| p.code == code)
}

/// Checks the field rules that typing alone cannot express.
///
/// Text fields must be non-empty (whitespace counts as content); price and stock must be finite.
pub fn validate_fields(product: &Product) -> Result<(), ProductError> {
    require_text("title", &product.title)?;
    require_text("description", &product.description)?;
    require_text("thumbnail", &product.thumbnail)?;
    require_text("code", &product.code)?;

    require_finite("price", product.price)?;
    require_finite("stock", product.stock)?;
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ProductError> {
    if !value.is_finite() {
        return Err(ProductError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), ProductError> {
    if value.is_empty() {
        return Err(ProductError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
