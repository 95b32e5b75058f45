//! Checkout error types.

use doc_store::StoreError;
use domain::DomainError;
use thiserror::Error;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires a non-empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Payment gateway error.
    #[error("Payment gateway error: {0}")]
    PaymentGateway(String),

    /// Shipping estimator error.
    #[error("Shipping estimator error: {0}")]
    ShippingEstimator(String),

    /// Notification service error.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Domain error.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
