//! Product catalog: CRUD over the `products` collection.

use doc_store::{Document, DocumentStore, OrderBy, StoreError, record_from};
use serde_json::Value;

use common::ProductId;

use crate::error::DomainError;
use crate::money::Money;
use crate::product::{Product, ProductDetails, ProductError};

const COLLECTION: &str = "products";

/// Where a catalog read came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Live data from the document store.
    Store,

    /// The built-in demo catalog, served because the store was down.
    Fallback,
}

/// A product listing together with its source.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub source: CatalogSource,
    pub products: Vec<Product>,
}

/// Service for browsing and administering the product catalog.
///
/// Reads degrade instead of failing: when the store is unreachable the
/// demo catalog is served, tagged [`CatalogSource::Fallback`] so a caller
/// can tell degraded data from live data. Writes always propagate store
/// failures.
pub struct CatalogService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CatalogService<S> {
    /// Creates a new catalog service backed by the given document store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every product, name ascending.
    ///
    /// On a store failure, serves the demo catalog tagged as fallback.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<ProductListing, DomainError> {
        match self.store.list(COLLECTION, OrderBy::asc("name")).await {
            Ok(documents) => {
                let products = documents
                    .into_iter()
                    .map(product_from_document)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ProductListing {
                    source: CatalogSource::Store,
                    products,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "product listing unavailable, serving demo catalog");
                Ok(ProductListing {
                    source: CatalogSource::Fallback,
                    products: demo_catalog(),
                })
            }
        }
    }

    /// Loads one product, or `None` if it does not exist.
    ///
    /// On a store failure, falls back to a demo-catalog lookup.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        match self.store.get(COLLECTION, id.as_str()).await {
            Ok(Some(document)) => Ok(Some(product_from_document(document)?)),
            Ok(None) => Ok(None),
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "product read unavailable, trying demo catalog");
                Ok(demo_catalog().into_iter().find(|p| &p.id == id))
            }
        }
    }

    /// Validates and stores a new product, returning the assigned id.
    #[tracing::instrument(skip(self, details))]
    pub async fn add_product(&self, details: &ProductDetails) -> Result<ProductId, DomainError> {
        details.validate()?;

        let id = self.store.create(COLLECTION, record_from(details)?).await?;
        tracing::info!(product_id = %id, name = %details.name, "product added");

        Ok(ProductId::new(id))
    }

    /// Validates and overwrites an existing product's details.
    #[tracing::instrument(skip(self, details))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        details: &ProductDetails,
    ) -> Result<(), DomainError> {
        details.validate()?;

        self.store
            .update(COLLECTION, id.as_str(), record_from(details)?)
            .await
            .map_err(|err| match err {
                StoreError::NotFound { .. } => ProductError::ProductNotFound(id.clone()).into(),
                other => DomainError::Store(other),
            })
    }

    /// Deletes a product. Deleting an absent product is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), DomainError> {
        self.store.delete(COLLECTION, id.as_str()).await?;
        Ok(())
    }
}

/// The built-in demo catalog, served when the product store is down.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            ProductDetails {
                name: "Wireless Headphones".to_string(),
                description: "High-quality wireless headphones with noise cancellation"
                    .to_string(),
                price: Money::from_rupees(2999),
                original_price: Some(Money::from_rupees(3999)),
                category: "electronics".to_string(),
                stock: 50,
                is_on_sale: true,
                image_url: Some("/placeholder.svg?height=300&width=300".to_string()),
            },
        ),
        Product::new(
            "2",
            ProductDetails {
                name: "Cotton T-Shirt".to_string(),
                description: "Comfortable cotton t-shirt in various colors".to_string(),
                price: Money::from_rupees(599),
                original_price: None,
                category: "clothing".to_string(),
                stock: 100,
                is_on_sale: false,
                image_url: Some("/placeholder.svg?height=300&width=300".to_string()),
            },
        ),
        Product::new(
            "3",
            ProductDetails {
                name: "Smart Watch".to_string(),
                description: "Feature-rich smartwatch with health monitoring".to_string(),
                price: Money::from_rupees(8999),
                original_price: Some(Money::from_rupees(12999)),
                category: "electronics".to_string(),
                stock: 25,
                is_on_sale: true,
                image_url: Some("/placeholder.svg?height=300&width=300".to_string()),
            },
        ),
        Product::new(
            "4",
            ProductDetails {
                name: "Plant Pot Set".to_string(),
                description: "Beautiful ceramic plant pots for your garden".to_string(),
                price: Money::from_rupees(1299),
                original_price: None,
                category: "home".to_string(),
                stock: 30,
                is_on_sale: false,
                image_url: Some("/placeholder.svg?height=300&width=300".to_string()),
            },
        ),
    ]
}

fn product_from_document(document: Document) -> Result<Product, DomainError> {
    let Document { id, data } = document;
    let details: ProductDetails = serde_json::from_value(Value::Object(data))?;
    Ok(Product::new(id, details))
}
