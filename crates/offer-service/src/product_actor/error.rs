//! Error types for the Product catalog.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A product with this id is already in the catalog.
    #[error("Product already exists: {0}")]
    Conflict(ProductId),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the product store.
    #[error("Product store communication error: {0}")]
    StoreCommunication(String),
}
