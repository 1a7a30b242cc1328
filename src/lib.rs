//! # Taco Shop
//!
//! > **The order-assembly workflow of a taco-customization storefront.**
//!
//! A customer designs tacos from a fixed ingredient catalog, accumulates
//! them into an order across multiple form submissions, then checks out
//! with delivery and payment details. This crate is that workflow and its
//! validation engine: no HTML, no HTTP, no persistence. The surrounding
//! collaborators (rendering, routing, storage) talk to it through the
//! clients and views it exposes.
//!
//! ## Core Concepts
//!
//! ### Sessions as Actors
//! Each customer's in-progress order is session-scoped mutable state. We
//! keep it inside a [`framework::SessionActor`] that processes requests
//! sequentially: one request at a time may read or mutate a session, which
//! is exactly the serialization the workflow needs: no locks, no two
//! concurrent form posts interleaving on the same order.
//!
//! ### Rejections Are Data
//! Validation never throws. The engine returns the complete violation set
//! for a submission in one pass, and the workflow returns rejected states
//! as outcomes that carry everything needed to re-present the form. The
//! request cycle cannot be crashed by malformed input.
//!
//! ### Pure Core, Async Edges
//! The catalog, the taco builder, the validation rules, and the checkout
//! merge are synchronous pure functions, testable without a runtime. Only
//! the message transport and the fulfillment handoff are async.
//!
//! ## Module Tour
//!
//! ### 1. The Domain ([`model`], [`catalog`], [`validation`])
//! Pure data and pure rules.
//! - **Key items**: [`model::Order`], [`catalog::Catalog`],
//!   [`validation::validate_order_fields`].
//!
//! ### 2. The Workflow ([`order_flow`])
//! The per-session state machine: build a taco, accumulate it, check out.
//! - **Key items**: [`order_flow::OrderWorkflow`],
//!   [`order_flow::build_taco`], [`order_flow::OrderFlowCommand`].
//!
//! ### 3. The Engine ([`framework`])
//! Generic session-actor plumbing, reused by any [`framework::SessionWorkflow`].
//! - **Key items**: [`framework::SessionActor`], [`framework::SessionClient`].
//!
//! ### 4. The Interface ([`clients`], [`view`])
//! Typed clients and render payloads; raw message passing stays internal.
//! - **Key items**: [`clients::OrderFlowClient`], [`view::DesignView`].
//!
//! ### 5. The Edges ([`fulfillment`], [`lifecycle`])
//! The persistence seam and the system wiring.
//! - **Key items**: [`fulfillment::Fulfillment`], [`lifecycle::TacoShop`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use taco_shop::lifecycle::TacoShop;
//! use taco_shop::model::{OrderFields, TacoSubmission};
//!
//! let shop = TacoShop::new();
//! let session = shop.order_flow.open_session().await?;
//!
//! let submission = TacoSubmission::new("Basic Taco", ["FLTO", "GRBF", "CHED"]);
//! shop.order_flow.submit_taco(session.clone(), submission).await?;
//!
//! let fields = OrderFields::new(
//!     "Ima Hungry", "1234 Culinary Blvd.", "Foodsville", "CO", "81019",
//!     "4111111111111111", "10/19", "123",
//! );
//! let result = shop.order_flow.submit_order(session, fields).await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod fulfillment;
pub mod lifecycle;
pub mod model;
pub mod order_flow;
pub mod validation;
pub mod view;
