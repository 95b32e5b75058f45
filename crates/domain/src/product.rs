//! Catalog product types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use common::ProductId;

use crate::money::Money;

/// Errors raised by product validation and lookup.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Prices must not be negative.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: Money },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// The stored fields of a catalog product, without its id.
///
/// Field names serialize in the camelCase shape the storefront documents
/// use (`originalPrice`, `isOnSale`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: Money,

    /// The "was" price shown next to a discounted price. Display-only:
    /// nothing enforces an ordering against `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,

    pub category: String,
    pub stock: u32,

    #[serde(default)]
    pub is_on_sale: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductDetails {
    /// Validates the write-time invariants: `price` and, when present,
    /// `original_price` must not be negative.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.price.is_negative() {
            return Err(ProductError::NegativePrice { price: self.price });
        }
        if let Some(original) = self.original_price
            && original.is_negative()
        {
            return Err(ProductError::NegativePrice { price: original });
        }
        Ok(())
    }
}

/// A catalog product: store-assigned id plus its details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(flatten)]
    pub details: ProductDetails,
}

impl Product {
    /// Creates a product from an id and its details.
    pub fn new(id: impl Into<ProductId>, details: ProductDetails) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.details.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details() -> ProductDetails {
        ProductDetails {
            name: "Wireless Headphones".to_string(),
            description: "High-quality wireless headphones".to_string(),
            price: Money::from_rupees(2999),
            original_price: Some(Money::from_rupees(3999)),
            category: "electronics".to_string(),
            stock: 50,
            is_on_sale: true,
            image_url: None,
        }
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let value = serde_json::to_value(details()).unwrap();

        assert_eq!(value["originalPrice"], json!(399900));
        assert_eq!(value["isOnSale"], json!(true));
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let value = json!({
            "name": "Cotton T-Shirt",
            "description": "Comfortable cotton t-shirt",
            "price": 59900,
            "category": "clothing",
            "stock": 100,
        });

        let details: ProductDetails = serde_json::from_value(value).unwrap();
        assert!(!details.is_on_sale);
        assert!(details.original_price.is_none());
        assert!(details.image_url.is_none());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut invalid = details();
        invalid.price = Money::from_paise(-1);
        assert!(matches!(
            invalid.validate(),
            Err(ProductError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_original_price() {
        let mut invalid = details();
        invalid.original_price = Some(Money::from_paise(-100));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_validate_ignores_price_ordering() {
        // originalPrice below price is legal: it is display-only.
        let mut odd = details();
        odd.original_price = Some(Money::from_rupees(1));
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn test_product_flattens_details() {
        let product = Product::new("prod-1", details());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], json!("prod-1"));
        assert_eq!(value["name"], json!("Wireless Headphones"));
    }
}
