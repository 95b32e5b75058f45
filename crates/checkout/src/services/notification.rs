//! Order-confirmation notifier trait and mock implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use common::OrderId;

use crate::error::CheckoutError;

/// Trait for customer notifications.
///
/// Consumed best-effort: checkout logs and swallows failures from here.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends an order confirmation to the given email address.
    async fn order_confirmation(
        &self,
        email: &str,
        order_id: &OrderId,
    ) -> Result<(), CheckoutError>;
}

#[derive(Debug, Default)]
struct MockNotifierState {
    sent: Vec<(String, OrderId)>,
    fail_on_send: bool,
}

/// Mock notifier that records every confirmation instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    state: Arc<RwLock<MockNotifierState>>,
}

impl MockNotifier {
    /// Creates a new mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the notifier to fail on every subsequent send.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of confirmations recorded.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().sent.len()
    }

    /// Returns true if a confirmation was recorded for the given email
    /// and order.
    pub fn has_confirmation(&self, email: &str, order_id: &OrderId) -> bool {
        self.state
            .read()
            .unwrap()
            .sent
            .iter()
            .any(|(to, order)| to == email && order == order_id)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn order_confirmation(
        &self,
        email: &str,
        order_id: &OrderId,
    ) -> Result<(), CheckoutError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(CheckoutError::Notification(
                "Email service unavailable".to_string(),
            ));
        }

        state.sent.push((email.to_string(), order_id.clone()));
        Ok(())
    }
}
