//! # Offer Store
//!
//! The Offer record kind: how an [`Offer`] is built from its creation payload, and the single
//! targeted mutation it accepts.
//!
//! ## Structure
//!
//! - [`record`] - [`StoreRecord`](record_store::StoreRecord) implementation for [`Offer`]
//! - [`error`] - [`OfferError`], shared by the store, the client and the orchestrator
//! - [`actions`] - [`OfferAction`] and [`OfferActionResult`]
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Terminal states
//!
//! The record itself refuses to leave `cancelled`, and refuses to move `expired` anywhere but
//! `cancelled`. Because the store applies actions one at a time, a lazy `expired` write racing a
//! cancellation can never overwrite it.
//!
//! ## Usage
//!
//! ```rust
//! use offer_service::offer_actor;
//! use offer_service::clients::{OfferClient, OfferStore};
//! use offer_service::model::{OfferCreate, OfferStatus, ProductId};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, generic_client) = offer_actor::new(32);
//!     let client = OfferClient::new(generic_client);
//!     tokio::spawn(store.run());
//!
//!     let id = client
//!         .save(OfferCreate {
//!             description: "Spring sale".to_string(),
//!             price: Decimal::new(100, 0),
//!             currency_code: "EUR".to_string(),
//!             created_on: "19/10/2026".to_string(),
//!             days_valid_for: 20,
//!             product_id: ProductId(4621346),
//!             status: OfferStatus::Valid,
//!         })
//!         .await?;
//!
//!     assert_eq!(client.update_status(id, OfferStatus::Cancelled).await?, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod record;

pub use actions::*;
pub use error::*;

use crate::model::Offer;
use record_store::{StoreActor, StoreClient};

/// Creates a new Offer store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Offer>, StoreClient<Offer>) {
    StoreActor::new(buffer_size)
}
