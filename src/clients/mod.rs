//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod order_flow_client;
pub mod session_handle;

pub use order_flow_client::*;
pub use session_handle::*;
