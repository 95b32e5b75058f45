//! Order service: the single write path for orders.

use chrono::Utc;
use doc_store::{Document, DocumentStore, OrderBy, Record, record_from};
use serde_json::Value;

use common::OrderId;

use crate::error::DomainError;
use crate::money::Money;

use super::{
    CustomerInfo, Order, OrderError, OrderItem, OrderRecord, OrderStatus, PaymentMethod,
    ShippingAddress,
};

const COLLECTION: &str = "orders";

/// Service for creating orders and driving their status.
///
/// Creation is the only way an order comes into existence, and a status
/// transition is the only mutation afterward. Each operation issues
/// exactly one store write; retries belong to the store, not here.
pub struct OrderService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> OrderService<S> {
    /// Creates a new order service backed by the given document store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an order in `pending` status and persists it.
    ///
    /// `items` must be non-empty and `total` non-negative; the total is
    /// taken as given (checkout owns shipping and tax) and never
    /// recomputed from the items afterward. Both timestamps are stamped
    /// with the same instant. Returns the order with its store-assigned
    /// id.
    #[tracing::instrument(skip(self, items, customer_info, shipping_address))]
    pub async fn create_order(
        &self,
        items: Vec<OrderItem>,
        customer_info: CustomerInfo,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
        total: Money,
    ) -> Result<Order, DomainError> {
        if items.is_empty() {
            return Err(OrderError::EmptyOrder.into());
        }
        if total.is_negative() {
            return Err(OrderError::NegativeTotal { total }.into());
        }

        let now = Utc::now();
        let record = OrderRecord {
            items,
            total,
            status: OrderStatus::Pending,
            customer_info,
            shipping_address,
            payment_method,
            created_at: now,
            updated_at: now,
        };

        let id = self.store.create(COLLECTION, record_from(&record)?).await?;
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %id, total = %record.total, "order created");

        Ok(Order {
            id: OrderId::new(id),
            record,
        })
    }

    /// Moves an order to `new_status`.
    ///
    /// Any status may be set from any other status; see [`OrderStatus`].
    /// Only the status and the updated timestamp are written; items,
    /// total, customer and shipping fields stay untouched. Fails with
    /// [`OrderError::OrderNotFound`] for an unknown id.
    #[tracing::instrument(skip(self))]
    pub async fn transition_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<Order, DomainError> {
        let Some(mut order) = self.get_order(order_id).await? else {
            return Err(OrderError::OrderNotFound(order_id.clone()).into());
        };

        let now = Utc::now();
        let mut patch = Record::new();
        patch.insert("status".to_string(), serde_json::to_value(new_status)?);
        patch.insert("updatedAt".to_string(), serde_json::to_value(now)?);

        self.store
            .update(COLLECTION, order_id.as_str(), patch)
            .await?;

        order.record.status = new_status;
        order.record.updated_at = now;

        metrics::counter!("order_status_transitions_total").increment(1);
        tracing::info!(order_id = %order_id, status = %new_status, "order status updated");

        Ok(order)
    }

    /// Loads an order by id, or `None` if it does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError> {
        let Some(document) = self.store.get(COLLECTION, order_id.as_str()).await? else {
            return Ok(None);
        };

        Ok(Some(order_from_document(document)?))
    }

    /// Lists every order, newest first.
    ///
    /// A store failure propagates: an admin view must be able to tell
    /// "no orders" from "store down".
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        let documents = self
            .store
            .list(COLLECTION, OrderBy::desc("createdAt"))
            .await?;

        documents.into_iter().map(order_from_document).collect()
    }
}

fn order_from_document(document: Document) -> Result<Order, DomainError> {
    let Document { id, data } = document;
    let record: OrderRecord = serde_json::from_value(Value::Object(data))?;
    Ok(Order {
        id: OrderId::new(id),
        record,
    })
}
