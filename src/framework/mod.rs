//! Generic session-actor framework.
//!
//! This module provides the building blocks for session-scoped workflow
//! state: an actor that owns every session of one workflow type and
//! processes requests one at a time.
//!
//! # Main Components
//!
//! - [`SessionWorkflow`] - Trait a per-session state machine implements
//! - [`SessionActor`] - Generic actor owning the session map
//! - [`SessionClient`] - Type-safe sender half
//! - [`SessionError`] - Transport-level error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
