//! [`StoreRecord`] implementation for the [`Offer`] model.

use super::actions::{OfferAction, OfferActionResult};
use super::error::OfferError;
use crate::model::{Offer, OfferCreate, OfferId};
use record_store::StoreRecord;

impl StoreRecord for Offer {
    type Id = OfferId;
    type Create = OfferCreate;
    type Action = OfferAction;
    type ActionResult = OfferActionResult;
    type Error = OfferError;

    fn from_create(id: OfferId, params: OfferCreate) -> Result<Self, OfferError> {
        Ok(Self {
            id,
            description: params.description,
            price: params.price,
            currency_code: params.currency_code,
            created_on: params.created_on,
            days_valid_for: params.days_valid_for,
            product_id: params.product_id,
            status: params.status,
        })
    }

    /// # Actions
    /// - `SetStatus`: updates `status` if the transition is legal, returns the previous status
    fn apply(&mut self, action: OfferAction) -> Result<OfferActionResult, OfferError> {
        match action {
            OfferAction::SetStatus(next) => {
                if !self.status.can_transition_to(next) {
                    return Err(OfferError::IllegalTransition {
                        from: self.status,
                        to: next,
                    });
                }
                let previous = std::mem::replace(&mut self.status, next);
                Ok(OfferActionResult::SetStatus(previous))
            }
        }
    }
}
