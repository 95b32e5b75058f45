//! The persisted order snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::OrderId;

use crate::money::Money;

use super::{CustomerInfo, OrderItem, OrderStatus, PaymentMethod, ShippingAddress};

/// The stored shape of an order inside the `orders` collection.
///
/// The document id lives next to the record, never inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRecord {
    pub(crate) items: Vec<OrderItem>,
    pub(crate) total: Money,
    pub(crate) status: OrderStatus,
    pub(crate) customer_info: CustomerInfo,
    pub(crate) shipping_address: ShippingAddress,
    pub(crate) payment_method: PaymentMethod,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// A placed order.
///
/// Line items, total, customer and shipping details are fixed when the
/// order is created; only the status and the updated timestamp change
/// afterward, through [`OrderService::transition_status`].
///
/// [`OrderService::transition_status`]: super::OrderService::transition_status
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub(crate) id: OrderId,
    pub(crate) record: OrderRecord,
}

impl Order {
    /// Returns the store-assigned order id.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the purchased line-item snapshots.
    pub fn items(&self) -> &[OrderItem] {
        &self.record.items
    }

    /// Returns the order total, fixed at creation time.
    pub fn total(&self) -> Money {
        self.record.total
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.record.status
    }

    /// Returns the customer who placed the order.
    pub fn customer_info(&self) -> &CustomerInfo {
        &self.record.customer_info
    }

    /// Returns the shipping address.
    pub fn shipping_address(&self) -> &ShippingAddress {
        &self.record.shipping_address
    }

    /// Returns the payment method tag.
    pub fn payment_method(&self) -> PaymentMethod {
        self.record.payment_method
    }

    /// Returns when the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at
    }

    /// Returns when the order was last touched.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.record.updated_at
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.record.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> u32 {
        self.record.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> OrderRecord {
        let now = Utc::now();
        OrderRecord {
            items: vec![OrderItem::new(
                "prod-1",
                "Widget",
                Money::from_paise(10000),
                2,
            )],
            total: Money::from_paise(23000),
            status: OrderStatus::Pending,
            customer_info: CustomerInfo::new("Asha", "Patel", "asha@example.com", "9000000000"),
            shipping_address: ShippingAddress::new("12 MG Road", "Pune", "MH", "411001"),
            payment_method: PaymentMethod::Razorpay,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_serializes_with_stored_field_names() {
        let value = serde_json::to_value(record()).unwrap();

        assert_eq!(value["status"], json!("pending"));
        assert_eq!(value["paymentMethod"], json!("razorpay"));
        assert_eq!(value["customerInfo"]["firstName"], json!("Asha"));
        assert_eq!(value["shippingAddress"]["pincode"], json!("411001"));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_record_roundtrip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let back: OrderRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_order_accessors() {
        let order = Order {
            id: OrderId::new("ord-1"),
            record: record(),
        };

        assert_eq!(order.id().as_str(), "ord-1");
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.total_quantity(), 2);
        assert_eq!(order.total(), Money::from_paise(23000));
        assert_eq!(order.status(), OrderStatus::Pending);
    }
}
