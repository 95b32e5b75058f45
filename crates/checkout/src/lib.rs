//! Checkout orchestration for the storefront.
//!
//! This crate turns a cart into a placed order: it derives the checkout
//! summary (subtotal, shipping, tax), creates the order through the domain
//! layer, charges the payment gateway, and fires the best-effort shipping
//! estimate and confirmation email. The external services are capability
//! traits with mock implementations; a real provider integration replaces
//! a mock without touching the orchestration.

pub mod checkout;
pub mod error;
pub mod services;

pub use checkout::{
    CheckoutService, CheckoutSummary, PlacedOrder, SHIPPING_FEE, TAX_RATE_PERCENT,
};
pub use error::{CheckoutError, Result};
pub use services::{
    MockNotifier, MockPaymentGateway, MockShippingEstimator, Notifier, PaymentGateway,
    PaymentReceipt, ShippingEstimate, ShippingEstimator,
};
