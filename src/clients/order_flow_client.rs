use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::catalog::Catalog;
use crate::framework::{SessionClient, SessionError, SessionId, SessionWorkflow};
use crate::model::{Order, OrderFields, TacoSubmission};
use crate::order_flow::{OrderFlowCommand, OrderFlowError, OrderFlowOutcome, OrderWorkflow};
use crate::validation::Violation;
use crate::view::{DesignView, OrderView};

use super::session_handle::SessionHandle;

/// How a checkout submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutResult {
    /// The order was accepted and handed to fulfillment; the session is
    /// empty again.
    Finalized(Order),
    /// Validation failed; the order (with merged field values) and the full
    /// violation set are returned for re-presentation.
    Rejected {
        order: Order,
        violations: Vec<Violation>,
    },
}

/// Client for driving the order workflow actor.
///
/// Exposes the storefront's routing surface: the design step, taco
/// submission, the order step, and checkout. One method per route.
#[derive(Clone)]
pub struct OrderFlowClient {
    inner: SessionClient<OrderWorkflow>,
}

impl OrderFlowClient {
    pub fn new(inner: SessionClient<OrderWorkflow>) -> Self {
        Self { inner }
    }

    /// Opens a fresh session with an empty order.
    #[instrument(skip(self))]
    pub async fn open_session(&self) -> Result<SessionId, OrderFlowError> {
        debug!("Sending request");
        self.inner.open().await.map_err(Self::map_error)
    }

    /// The design step: the ingredient catalog grouped for rendering.
    ///
    /// Reads shared immutable data, so no round trip to the actor.
    pub fn design_view(&self) -> DesignView {
        DesignView::from_catalog(Catalog::shared())
    }

    /// Submits one designed taco. Returns the new taco count on success.
    #[instrument(skip(self, submission))]
    pub async fn submit_taco(
        &self,
        id: SessionId,
        submission: TacoSubmission,
    ) -> Result<usize, OrderFlowError> {
        debug!(?submission, "submit_taco called");
        let outcome = self
            .inner
            .apply(id, OrderFlowCommand::SubmitTaco(submission))
            .await
            .map_err(Self::map_error)?;

        match outcome {
            OrderFlowOutcome::TacoAdded { taco_count } => {
                info!(taco_count, "Taco added");
                Ok(taco_count)
            }
            OrderFlowOutcome::TacoRejected { error } => Err(OrderFlowError::Build(error)),
            other => Err(OrderFlowError::ActorCommunication(format!(
                "unexpected outcome: {other:?}"
            ))),
        }
    }

    /// The order step: the in-progress order plus any violations from the
    /// last rejected checkout.
    #[instrument(skip(self))]
    pub async fn order_view(&self, id: SessionId) -> Result<OrderView, OrderFlowError> {
        let state = self.snapshot(id.clone()).await?;
        let state = state.ok_or(OrderFlowError::SessionExpired(id))?;
        Ok(OrderView {
            order: state.order,
            violations: state.last_violations,
        })
    }

    /// "Design another taco": back to the design step, order untouched.
    #[instrument(skip(self))]
    pub async fn start_another(&self, id: SessionId) -> Result<(), OrderFlowError> {
        let outcome = self
            .inner
            .apply(id, OrderFlowCommand::StartAnother)
            .await
            .map_err(Self::map_error)?;
        match outcome {
            OrderFlowOutcome::DesignStarted => Ok(()),
            other => Err(OrderFlowError::ActorCommunication(format!(
                "unexpected outcome: {other:?}"
            ))),
        }
    }

    /// Submits the checkout form.
    ///
    /// Returns [`CheckoutResult::Finalized`] or
    /// [`CheckoutResult::Rejected`]; a checkout on an empty order is the
    /// [`OrderFlowError::EmptyOrder`] policy error.
    #[instrument(skip(self, fields))]
    pub async fn submit_order(
        &self,
        id: SessionId,
        fields: OrderFields,
    ) -> Result<CheckoutResult, OrderFlowError> {
        debug!(?fields, "submit_order called");
        let outcome = self
            .inner
            .apply(id, OrderFlowCommand::SubmitOrder(fields))
            .await
            .map_err(Self::map_error)?;

        match outcome {
            OrderFlowOutcome::Finalized { order } => {
                info!(taco_count = order.taco_count(), "Order finalized");
                Ok(CheckoutResult::Finalized(*order))
            }
            OrderFlowOutcome::OrderRejected { order, violations } => {
                info!(count = violations.len(), "Checkout rejected");
                Ok(CheckoutResult::Rejected {
                    order: *order,
                    violations,
                })
            }
            OrderFlowOutcome::EmptyOrder => Err(OrderFlowError::EmptyOrder),
            other => Err(OrderFlowError::ActorCommunication(format!(
                "unexpected outcome: {other:?}"
            ))),
        }
    }

    fn map_error(e: SessionError) -> OrderFlowError {
        match e {
            SessionError::SessionNotFound(id) => OrderFlowError::SessionExpired(id),
            SessionError::Workflow(msg) => OrderFlowError::Fulfillment(msg),
            other => OrderFlowError::ActorCommunication(other.to_string()),
        }
    }
}

#[async_trait]
impl SessionHandle<OrderWorkflow> for OrderFlowClient {
    type Error = OrderFlowError;

    fn inner(&self) -> &SessionClient<OrderWorkflow> {
        &self.inner
    }

    fn map_error(e: SessionError) -> OrderFlowError {
        OrderFlowClient::map_error(e)
    }
}
