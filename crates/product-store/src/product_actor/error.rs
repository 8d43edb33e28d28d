//! Error types for the Product actor.

use crate::model::ProductId;
use collection_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// Entity rejections travel through the actor boxed inside [`FrameworkError::EntityError`];
/// the [`From`] conversion below recovers them so callers can match on the variant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A required field is missing, empty, or of the wrong type.
    #[error("Invalid fields: {0}")]
    Validation(String),

    /// The `code` is already used by another product.
    #[error("Duplicate code: {0}")]
    DuplicateCode(String),

    /// The largest id is already taken, so no new product can be numbered.
    #[error("No product id left after {0}")]
    IdsExhausted(ProductId),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The backing file could not be read, parsed or written.
    #[error("Product storage error: {0}")]
    Io(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ProductError>() {
            Ok(product_error) => product_error,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(FrameworkError::Storage(e)) => ProductError::Io(e.to_string()),
            Err(other) => ProductError::ActorCommunication(other.to_string()),
        }
    }
}
