//! Error types for the Offer store and orchestrator.

use crate::model::{OfferId, OfferStatus, ProductId, UnrecognizedStatus};
use crate::service::resolver::ResolveError;
use thiserror::Error;

/// Errors that can occur during offer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OfferError {
    /// The requested offer was not found.
    #[error("Offer not found: {0}")]
    NotFound(OfferId),

    /// The product referenced by a new offer does not exist.
    #[error("Invalid product: {0}")]
    InvalidProduct(ProductId),

    /// The offer store could not complete a write or lookup.
    #[error("Offer persistence failure: {0}")]
    PersistenceFailure(String),

    /// A targeted status update matched no offer.
    #[error("Offer {0} was modified concurrently")]
    ConcurrentModification(OfferId),

    /// A targeted status update matched more than one offer.
    #[error("Status update for offer {id} affected {rows} records")]
    InvariantViolation { id: OfferId, rows: u64 },

    /// The stored `createdOn` could not be read with the configured format.
    #[error(transparent)]
    DateParse(#[from] ResolveError),

    /// The store refused to move a terminal status.
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: OfferStatus, to: OfferStatus },

    #[error(transparent)]
    UnrecognizedStatus(#[from] UnrecognizedStatus),

    /// The submitted offer is missing or has malformed required fields.
    #[error("Offer validation error: {0}")]
    Validation(String),
}
