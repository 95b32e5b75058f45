//! Domain layer for the storefront.
//!
//! This crate provides the core storefront behavior:
//! - Cart aggregation (line-item merging, quantity rules, running totals)
//! - Product catalog CRUD with a degraded-read fallback
//! - Order lifecycle: snapshot creation and status transitions

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod product;

pub use common::{OrderId, ProductId};

pub use cart::{Cart, CartLineItem};
pub use catalog::{CatalogService, CatalogSource, ProductListing, demo_catalog};
pub use error::DomainError;
pub use money::Money;
pub use order::{
    CustomerInfo, Order, OrderError, OrderItem, OrderService, OrderStatus, PaymentMethod,
    ShippingAddress,
};
pub use product::{Product, ProductDetails, ProductError};
