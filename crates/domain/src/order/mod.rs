//! Order lifecycle: the status machine, order snapshots, and the order
//! service.

mod record;
mod service;
mod status;
mod value_objects;

pub use record::Order;
pub(crate) use record::OrderRecord;
pub use service::OrderService;
pub use status::OrderStatus;
pub use value_objects::{CustomerInfo, OrderItem, PaymentMethod, ShippingAddress};

use thiserror::Error;

use common::OrderId;

use crate::money::Money;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An order must contain at least one line item.
    #[error("Order has no items")]
    EmptyOrder,

    /// Order totals are fixed at creation and must not be negative.
    #[error("Invalid total: {total} (must not be negative)")]
    NegativeTotal { total: Money },

    /// The given value is not one of the five defined statuses.
    #[error("Invalid status: {value}")]
    InvalidStatus { value: String },

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),
}
