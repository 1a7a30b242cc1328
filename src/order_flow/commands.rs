//! Commands and outcomes for the order workflow.
//!
//! Each [`OrderFlowCommand`] corresponds to one form submission from the
//! storefront; each [`OrderFlowOutcome`] is the data the routing collaborator
//! needs to pick the next page. Rejections travel as outcomes, not errors,
//! so the session state they describe is always re-presentable.

use crate::model::{Order, OrderFields, TacoSubmission};
use crate::validation::Violation;

use super::BuildError;

/// One step of the order-assembly workflow.
#[derive(Debug, Clone)]
pub enum OrderFlowCommand {
    /// Design-form post: build a taco and append it to the order.
    SubmitTaco(TacoSubmission),
    /// "Design another taco": back to the design step, order untouched.
    StartAnother,
    /// Checkout-form post: merge fields, validate, finalize on success.
    SubmitOrder(OrderFields),
}

/// The observable result of one workflow step.
#[derive(Debug, Clone)]
pub enum OrderFlowOutcome {
    /// Taco built and appended; `taco_count` is the new order size.
    TacoAdded { taco_count: usize },
    /// The submission failed the build; the order is unchanged.
    TacoRejected { error: BuildError },
    /// Back at the design step.
    DesignStarted,
    /// Checkout attempted on an order with no tacos; rejected before
    /// validation ran.
    EmptyOrder,
    /// Validation failed; the order retains its tacos and the merged field
    /// values, ready for re-presentation alongside the violation set.
    OrderRejected {
        order: Box<Order>,
        violations: Vec<Violation>,
    },
    /// The order passed validation and was handed to fulfillment; the
    /// session has been reset to empty.
    Finalized { order: Box<Order> },
}
