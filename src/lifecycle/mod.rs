//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`TacoShop`] - Spawns the session actor, wires the fulfillment
//!   collaborator, and coordinates graceful shutdown
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
