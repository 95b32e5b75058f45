//! External service stubs consumed by checkout.

pub mod notification;
pub mod payment;
pub mod shipping;

pub use notification::{MockNotifier, Notifier};
pub use payment::{MockPaymentGateway, PaymentGateway, PaymentReceipt};
pub use shipping::{MockShippingEstimator, ShippingEstimate, ShippingEstimator};
