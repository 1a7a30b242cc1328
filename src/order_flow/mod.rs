//! The order-assembly workflow: builder, accumulator, and checkout.

pub mod builder;
pub mod checkout;
pub mod commands;
pub mod entity;
pub mod error;

pub use builder::{build_taco, MAX_TACO_NAME_LEN};
pub use commands::{OrderFlowCommand, OrderFlowOutcome};
pub use entity::{OrderWorkflow, Stage};
pub use error::{BuildError, OrderFlowError};

use crate::framework::{SessionActor, SessionClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates the order-workflow session actor and its generic client.
pub fn new() -> (SessionActor<OrderWorkflow>, SessionClient<OrderWorkflow>) {
    let session_counter = Arc::new(AtomicU64::new(1));
    let next_session_id = move || {
        let id = session_counter.fetch_add(1, Ordering::SeqCst);
        format!("session_{}", id)
    };

    SessionActor::new(32, next_session_id)
}
