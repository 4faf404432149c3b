//! # Offer Service
//!
//! Offers are time-bounded proposals on a product. An offer is created `valid`, becomes
//! `expired` once its validity window has passed, and can be `cancelled` at any time. Expiry is
//! resolved lazily whenever an offer is read.
//!
//! ## Modules
//!
//! - [`model`]: [`Offer`](model::Offer), [`Product`](model::Product) and
//!   [`OfferStatus`](model::OfferStatus)
//! - [`offer_actor`] / [`product_actor`]: the record kinds kept by the
//!   [`record_store`] runtime, and their errors
//! - [`clients`]: typed store clients and the [`OfferStore`](clients::OfferStore) /
//!   [`ProductCatalog`](clients::ProductCatalog) seams
//! - [`service`]: the [`OfferService`](service::OfferService) orchestrator and the pure status
//!   resolver
//! - [`config`]: TOML configuration
//! - [`lifecycle`]: [`OfferSystem`](lifecycle::OfferSystem) startup, shutdown and tracing
//! - [`http`]: the `/offer` REST routes

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod offer_actor;
pub mod product_actor;
pub mod service;
