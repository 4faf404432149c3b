//! # System Lifecycle
//!
//! Starting, wiring and stopping the offer service.
//!
//! [`OfferSystem`] creates the Offer and Product stores, spawns each in its own Tokio task,
//! registers the configured catalog products and builds the [`OfferService`](crate::service::OfferService)
//! from the store clients. Shutdown drops every client so the stores see their channels close,
//! then awaits the store tasks.
//!
//! [`setup_tracing`] initializes structured logging for the whole process.

pub mod offer_system;
pub mod tracing;

pub use offer_system::*;
pub use tracing::*;
