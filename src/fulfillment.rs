//! Seam to the persistence/fulfillment collaborator.
//!
//! The workflow core has no knowledge of how or where finalized orders are
//! stored; it hands each one to a [`Fulfillment`] implementation injected as
//! the session actor's context. [`InMemoryFulfillment`] is the
//! implementation used by the demo system and by tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use crate::model::Order;

/// Accepts finalized orders for downstream storage and preparation.
#[async_trait]
pub trait Fulfillment: Send + Sync + 'static {
    /// Takes ownership of one finalized order.
    ///
    /// An `Err` means the handoff failed; the workflow surfaces it as a
    /// fault, not as a validation problem.
    async fn accept(&self, order: Order) -> Result<(), String>;
}

/// Records accepted orders in memory.
#[derive(Clone, Default)]
pub struct InMemoryFulfillment {
    accepted: Arc<Mutex<Vec<Order>>>,
}

impl InMemoryFulfillment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every order accepted so far, in finalize order.
    pub fn accepted(&self) -> Vec<Order> {
        self.accepted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fulfillment for InMemoryFulfillment {
    async fn accept(&self, order: Order) -> Result<(), String> {
        info!(taco_count = order.taco_count(), "Order accepted for fulfillment");
        self.accepted.lock().unwrap().push(order);
        Ok(())
    }
}
