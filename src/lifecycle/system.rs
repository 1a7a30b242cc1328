use std::sync::Arc;

use tracing::{error, info};

use crate::clients::OrderFlowClient;
use crate::fulfillment::{Fulfillment, InMemoryFulfillment};

/// The runtime orchestrator for the taco storefront core.
///
/// `TacoShop` is responsible for:
/// - **Lifecycle management**: starting and stopping the session actor
/// - **Dependency wiring**: injecting the fulfillment collaborator into the
///   workflow actor's context
///
/// # Example
///
/// ```ignore
/// let shop = TacoShop::new();
///
/// let session = shop.order_flow.open_session().await?;
/// shop.order_flow.submit_taco(session.clone(), submission).await?;
/// let result = shop.order_flow.submit_order(session, fields).await?;
///
/// shop.shutdown().await?;
/// ```
pub struct TacoShop {
    /// Client for driving the order workflow actor.
    pub order_flow: OrderFlowClient,

    /// The in-memory fulfillment sink, when the default wiring is used.
    fulfillment: Option<InMemoryFulfillment>,

    /// Task handles for running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TacoShop {
    /// Creates a shop wired to an [`InMemoryFulfillment`] sink.
    pub fn new() -> Self {
        let fulfillment = InMemoryFulfillment::new();
        let mut shop = Self::with_fulfillment(Arc::new(fulfillment.clone()));
        shop.fulfillment = Some(fulfillment);
        shop
    }

    /// Creates a shop handing finalized orders to the given collaborator.
    pub fn with_fulfillment(fulfillment: Arc<dyn Fulfillment>) -> Self {
        let (actor, session_client) = crate::order_flow::new();

        // The fulfillment sink is the workflow's late-bound context.
        let handle = tokio::spawn(actor.run(fulfillment));

        Self {
            order_flow: OrderFlowClient::new(session_client),
            fulfillment: None,
            handles: vec![handle],
        }
    }

    /// Orders finalized so far, when the default in-memory sink is in use.
    pub fn finalized(&self) -> Vec<crate::model::Order> {
        self.fulfillment
            .as_ref()
            .map(|f| f.accepted())
            .unwrap_or_default()
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients, which closes their channels; the actor drains its
    /// mailbox and exits, and any panic in an actor task is reported here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_flow);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for TacoShop {
    fn default() -> Self {
        Self::new()
    }
}
