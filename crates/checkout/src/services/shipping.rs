//! Shipping ETA trait and mock implementation.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::ShippingAddress;

use crate::error::CheckoutError;

/// A delivery estimate for a shipping address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingEstimate {
    /// Estimated business days until delivery.
    pub estimated_days: u32,

    /// Projected delivery date.
    pub estimated_date: DateTime<Utc>,

    /// The carrier the estimate came from.
    pub partner: String,
}

/// Trait for shipping ETA lookups.
#[async_trait]
pub trait ShippingEstimator: Send + Sync {
    /// Estimates delivery for the given address.
    async fn estimate(
        &self,
        address: &ShippingAddress,
    ) -> Result<ShippingEstimate, CheckoutError>;
}

#[derive(Debug, Default)]
struct MockShippingState {
    estimate_count: usize,
    fail_on_estimate: bool,
}

/// Mock shipping estimator.
///
/// Quotes 3-7 business days, derived from the pincode so the same address
/// always gets the same estimate.
#[derive(Debug, Clone, Default)]
pub struct MockShippingEstimator {
    state: Arc<RwLock<MockShippingState>>,
}

impl MockShippingEstimator {
    /// Creates a new mock shipping estimator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the estimator to fail on every subsequent call.
    pub fn set_fail_on_estimate(&self, fail: bool) {
        self.state.write().unwrap().fail_on_estimate = fail;
    }

    /// Returns the number of estimates produced.
    pub fn estimate_count(&self) -> usize {
        self.state.read().unwrap().estimate_count
    }
}

#[async_trait]
impl ShippingEstimator for MockShippingEstimator {
    async fn estimate(
        &self,
        address: &ShippingAddress,
    ) -> Result<ShippingEstimate, CheckoutError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_estimate {
            return Err(CheckoutError::ShippingEstimator(
                "Shipping unavailable".to_string(),
            ));
        }

        state.estimate_count += 1;

        let mut hasher = DefaultHasher::new();
        address.pincode.hash(&mut hasher);
        let estimated_days = 3 + (hasher.finish() % 5) as u32;

        Ok(ShippingEstimate {
            estimated_days,
            estimated_date: Utc::now() + chrono::Duration::days(estimated_days as i64),
            partner: "Shiprocket".to_string(),
        })
    }
}
