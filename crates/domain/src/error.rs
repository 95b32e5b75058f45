//! Domain error types.

use doc_store::StoreError;
use thiserror::Error;

use crate::order::OrderError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the order lifecycle.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// A product failed validation or lookup.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// The document store call failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
