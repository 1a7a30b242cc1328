//! The per-session order workflow state machine.
//!
//! One [`OrderWorkflow`] lives per customer session inside the session
//! actor. It accumulates built tacos into the order, coordinates the
//! checkout submission, and resets itself after a successful finalize.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::framework::SessionWorkflow;
use crate::fulfillment::Fulfillment;
use crate::model::Order;
use crate::validation::Violation;

use super::{builder, checkout, OrderFlowCommand, OrderFlowOutcome};

/// Resting stages of a session between requests.
///
/// The validation stage is the synchronous interior of one `SubmitOrder`
/// call, and a finalized order resets the session immediately, so between
/// requests a session is always either empty or accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No tacos yet; checkout is a policy error from here.
    Empty,
    /// At least one taco accumulated; checkout may be attempted.
    Accumulating,
}

/// Session-scoped workflow state: the in-progress order, its stage, and the
/// violation set from the most recent rejected checkout.
#[derive(Debug, Clone)]
pub struct OrderWorkflow {
    pub order: Order,
    pub stage: Stage,
    /// Violations from the last rejected checkout, kept so the order page
    /// can be re-presented on the next view. Cleared when a taco is added
    /// and on successful finalize.
    pub last_violations: Vec<Violation>,
}

#[async_trait]
impl SessionWorkflow for OrderWorkflow {
    type Command = OrderFlowCommand;
    type Outcome = OrderFlowOutcome;
    type Context = Arc<dyn Fulfillment>;

    fn open() -> Self {
        Self {
            order: Order::default(),
            stage: Stage::Empty,
            last_violations: Vec::new(),
        }
    }

    async fn apply(
        &mut self,
        command: OrderFlowCommand,
        fulfillment: &Arc<dyn Fulfillment>,
    ) -> Result<OrderFlowOutcome, String> {
        match command {
            OrderFlowCommand::SubmitTaco(submission) => {
                match builder::build_taco(Catalog::shared(), &submission) {
                    Ok(taco) => {
                        self.order.tacos.push(taco);
                        self.stage = Stage::Accumulating;
                        self.last_violations.clear();
                        let taco_count = self.order.taco_count();
                        info!(taco_count, "Taco added to order");
                        Ok(OrderFlowOutcome::TacoAdded { taco_count })
                    }
                    Err(error) => {
                        debug!(%error, "Taco submission rejected");
                        Ok(OrderFlowOutcome::TacoRejected { error })
                    }
                }
            }

            OrderFlowCommand::StartAnother => {
                debug!(stage = ?self.stage, "Back to the design step");
                Ok(OrderFlowOutcome::DesignStarted)
            }

            OrderFlowCommand::SubmitOrder(fields) => {
                // Policy check before any validation: items are a
                // precondition of checkout, not a form field.
                if self.order.is_empty() {
                    warn!("Checkout attempted on an empty order");
                    return Ok(OrderFlowOutcome::EmptyOrder);
                }

                let violations = checkout::submit(&mut self.order, fields);
                if !violations.is_empty() {
                    info!(count = violations.len(), "Checkout rejected");
                    self.last_violations = violations.clone();
                    return Ok(OrderFlowOutcome::OrderRejected {
                        order: Box::new(self.order.clone()),
                        violations,
                    });
                }

                // Zero violations: hand off, then reset the session. A
                // fulfillment fault leaves the session untouched so the
                // submission can be retried.
                fulfillment.accept(self.order.clone()).await?;
                let finalized = std::mem::replace(self, Self::open()).order;
                info!(taco_count = finalized.taco_count(), "Order finalized");
                Ok(OrderFlowOutcome::Finalized {
                    order: Box::new(finalized),
                })
            }
        }
    }
}
