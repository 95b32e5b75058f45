//! Checkout orchestration: cart summary and order placement.

use std::sync::Arc;

use doc_store::DocumentStore;
use serde::Serialize;

use domain::{
    Cart, CustomerInfo, Money, Order, OrderItem, OrderService, PaymentMethod, ShippingAddress,
};

use crate::error::{CheckoutError, Result};
use crate::services::{
    Notifier, PaymentGateway, PaymentReceipt, ShippingEstimate, ShippingEstimator,
};

/// Flat shipping fee charged on every order.
pub const SHIPPING_FEE: Money = Money::from_rupees(50);

/// Tax rate applied to the cart subtotal, in percent.
pub const TAX_RATE_PERCENT: i64 = 10;

/// The amounts presented on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Sum of `price * quantity` over the cart lines.
    pub subtotal: Money,

    /// Flat shipping fee.
    pub shipping: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// What the customer pays: subtotal + shipping + tax.
    pub total: Money,
}

impl CheckoutSummary {
    /// Derives the summary for a cart's current contents.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let shipping = SHIPPING_FEE;
        let tax = subtotal.percent(TAX_RATE_PERCENT);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// A successfully placed order.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// The persisted order, in `pending` status.
    pub order: Order,

    /// The payment receipt for the grand total.
    pub receipt: PaymentReceipt,

    /// The delivery estimate, when the estimator answered in time.
    pub shipping_estimate: Option<ShippingEstimate>,
}

/// Orchestrates checkout across the order service and the external
/// service stubs.
pub struct CheckoutService<S: DocumentStore> {
    orders: OrderService<S>,
    payment: Arc<dyn PaymentGateway>,
    shipping: Arc<dyn ShippingEstimator>,
    notifier: Arc<dyn Notifier>,
}

impl<S: DocumentStore> CheckoutService<S> {
    /// Creates a new checkout service.
    pub fn new(
        orders: OrderService<S>,
        payment: Arc<dyn PaymentGateway>,
        shipping: Arc<dyn ShippingEstimator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            orders,
            payment,
            shipping,
            notifier,
        }
    }

    /// Returns a reference to the underlying order service.
    pub fn orders(&self) -> &OrderService<S> {
        &self.orders
    }

    /// Places an order for the cart's contents.
    ///
    /// The order is persisted first (in `pending` status), then the
    /// payment gateway is charged for the grand total. A declined charge
    /// propagates as an error and leaves the cart and the pending order
    /// as they are. The shipping estimate and the confirmation email are
    /// best-effort: their failures are logged and swallowed. On success
    /// the cart is cleared.
    #[tracing::instrument(skip(self, cart, customer_info, shipping_address))]
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        customer_info: CustomerInfo,
        shipping_address: ShippingAddress,
        method: PaymentMethod,
    ) -> Result<PlacedOrder> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let summary = CheckoutSummary::for_cart(cart);
        let items: Vec<OrderItem> = cart.items().iter().map(OrderItem::from).collect();

        let order = self
            .orders
            .create_order(
                items,
                customer_info,
                shipping_address,
                method,
                summary.total,
            )
            .await?;

        let receipt = match self.payment.charge(order.id(), method, summary.total).await {
            Ok(receipt) => receipt,
            Err(err) => {
                metrics::counter!("checkout_payment_failures_total").increment(1);
                return Err(err);
            }
        };

        let shipping_estimate = match self.shipping.estimate(order.shipping_address()).await {
            Ok(estimate) => Some(estimate),
            Err(err) => {
                tracing::warn!(order_id = %order.id(), error = %err, "shipping estimate failed");
                None
            }
        };

        if let Err(err) = self
            .notifier
            .order_confirmation(&order.customer_info().email, order.id())
            .await
        {
            tracing::warn!(order_id = %order.id(), error = %err, "order confirmation email failed");
        }

        cart.clear();
        metrics::counter!("checkout_completed_total").increment(1);
        tracing::info!(order_id = %order.id(), total = %summary.total, "order placed");

        Ok(PlacedOrder {
            order,
            receipt,
            shipping_estimate,
        })
    }
}
