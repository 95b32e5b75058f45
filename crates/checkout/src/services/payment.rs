//! Payment gateway trait and mock implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Serialize;

use common::OrderId;
use domain::{Money, PaymentMethod};

use crate::error::CheckoutError;

/// Result of a successful charge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// The transaction id assigned by the provider.
    pub transaction_id: String,

    /// The provider that processed the charge.
    pub method: PaymentMethod,
}

/// Trait for payment processing.
///
/// One implementation per provider slots in here; the mock below stands in
/// for all of them during development and tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges the given amount for an order.
    async fn charge(
        &self,
        order_id: &OrderId,
        method: PaymentMethod,
        amount: Money,
    ) -> Result<PaymentReceipt, CheckoutError>;
}

#[derive(Debug, Default)]
struct MockPaymentState {
    charges: HashMap<String, (OrderId, Money)>,
    next_id: u32,
    fail_on_charge: bool,
}

/// Mock payment gateway.
///
/// Issues provider-tagged transaction ids (`rzp_`, `stripe_`, `pp_`,
/// `COD_`) without talking to anyone.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentGateway {
    state: Arc<RwLock<MockPaymentState>>,
}

impl MockPaymentGateway {
    /// Creates a new mock payment gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the gateway to decline every subsequent charge.
    pub fn set_fail_on_charge(&self, fail: bool) {
        self.state.write().unwrap().fail_on_charge = fail;
    }

    /// Returns the number of successful charges.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charges.len()
    }

    /// Returns true if a charge exists with the given transaction id.
    pub fn has_charge(&self, transaction_id: &str) -> bool {
        self.state
            .read()
            .unwrap()
            .charges
            .contains_key(transaction_id)
    }

    fn prefix(method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::Razorpay => "rzp_",
            PaymentMethod::Stripe => "stripe_",
            PaymentMethod::Paypal => "pp_",
            PaymentMethod::CashOnDelivery => "COD_",
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(
        &self,
        order_id: &OrderId,
        method: PaymentMethod,
        amount: Money,
    ) -> Result<PaymentReceipt, CheckoutError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_charge {
            return Err(CheckoutError::PaymentGateway(
                "Payment declined".to_string(),
            ));
        }

        state.next_id += 1;
        let transaction_id = format!("{}{:04}", Self::prefix(method), state.next_id);
        state
            .charges
            .insert(transaction_id.clone(), (order_id.clone(), amount));

        Ok(PaymentReceipt {
            transaction_id,
            method,
        })
    }
}
