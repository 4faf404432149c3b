//! Targeted mutations for the Offer store.
//!
//! Offers are never replaced wholesale. The only change a stored offer accepts is a status
//! update, which the record checks against [`OfferStatus::can_transition_to`].

use crate::model::OfferStatus;

/// Custom actions for Offer records.
#[derive(Debug, Clone, PartialEq)]
pub enum OfferAction {
    /// Moves the offer to the given status.
    ///
    /// # Errors
    /// Fails with [`IllegalTransition`](super::OfferError::IllegalTransition) when the offer is
    /// `cancelled`, or `expired` and the target is not `cancelled`.
    SetStatus(OfferStatus),
}

/// Results from OfferActions - variants match 1:1 with OfferAction
#[derive(Debug, Clone, PartialEq)]
pub enum OfferActionResult {
    /// The status the offer had before the update.
    SetStatus(OfferStatus),
}
