//! # Product Catalog
//!
//! The Product record kind. Offers only ask the catalog whether a product exists, so products
//! are created (or seeded under fixed ids from configuration) and never change afterwards.
//!
//! - [`record`] - [`StoreRecord`](record_store::StoreRecord) implementation for
//!   [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the store and its client

pub mod error;
pub mod record;

pub use error::*;
pub use record::ProductAction;

use crate::model::Product;
use record_store::{StoreActor, StoreClient};

/// Creates a new Product store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(buffer_size)
}
