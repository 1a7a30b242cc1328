//! # Observability & Tracing
//!
//! Tracing setup for the storefront core.
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. The compact format hides module paths (`with_target(false)`);
//! log lines carry a `workflow` field instead, and the filter comes from
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: session actor startup, shutdown, final session count
//! - **Session events**: open, close, snapshot hits and misses
//! - **Workflow steps**: taco added/rejected, checkout rejected/finalized
//! - **Faults**: fulfillment failures and unknown sessions, with session ids
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Full command/outcome payloads at actor boundaries
//! RUST_LOG=debug cargo test
//!
//! # Filter to the framework only
//! RUST_LOG=taco_shop::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug`, client methods log their payload once at entry
//! (`debug!(?submission, "submit_taco called")`) and the actor logs each
//! `Apply` with its command; `info` keeps only the workflow milestones:
//!
//! ```text
//! INFO Session opened id="session_1" sessions=1
//! INFO Taco added taco_count=1
//! INFO Checkout rejected count=9
//! INFO Order finalized taco_count=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Log lines carry a workflow field instead of module paths
        .compact()
        .init();
}
