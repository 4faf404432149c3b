//! # Offer Orchestrator
//!
//! [`OfferService`] runs the three offer use cases on top of its collaborators:
//!
//! - an [`OfferStore`] for persistence
//! - a [`ProductCatalog`] for the product existence check
//! - a [`Clock`] for "today"
//! - the [`DateFormat`] `createdOn` is written and read with
//!
//! Status is resolved lazily: reading an offer computes its status against today and writes the
//! change back when it differs. There is no background sweep.

pub mod clock;
pub mod resolver;

pub use clock::*;
pub use resolver::*;

use crate::clients::{OfferStore, ProductCatalog};
use crate::config::DateFormat;
use crate::model::{Offer, OfferCreate, OfferDraft, OfferId, OfferStatus};
use crate::offer_actor::OfferError;
use tracing::{debug, error, info, instrument, warn};

pub struct OfferService<S, P, C> {
    store: S,
    catalog: P,
    clock: C,
    date_format: DateFormat,
}

impl<S, P, C> OfferService<S, P, C>
where
    S: OfferStore,
    P: ProductCatalog,
    C: Clock,
{
    pub fn new(store: S, catalog: P, clock: C, date_format: DateFormat) -> Self {
        Self {
            store,
            catalog,
            clock,
            date_format,
        }
    }

    /// Validates and stores a new offer, returning its id.
    ///
    /// `id`, `createdOn` and `status` in the draft are ignored. The offer is created today with a
    /// resolved status. Nothing is stored when the product does not exist.
    #[instrument(skip(self, draft), fields(product_id = %draft.product_id))]
    pub async fn create_offer(&self, draft: OfferDraft) -> Result<OfferId, OfferError> {
        if draft.has_server_fields() {
            debug!(
                id = ?draft.id,
                created_on = ?draft.created_on,
                status = ?draft.status,
                "Overwriting client-supplied fields"
            );
        }
        draft.validate()?;

        let exists = self.catalog.exists(draft.product_id).await.map_err(|e| {
            error!(error = %e, "Product check failed");
            OfferError::PersistenceFailure(format!("product catalog unavailable: {}", e))
        })?;
        if !exists {
            warn!("Product does not exist");
            return Err(OfferError::InvalidProduct(draft.product_id));
        }

        let today = self.clock.today();
        let status = resolve(OfferStatus::Undefined, today, draft.days_valid_for, today);
        let params = OfferCreate {
            description: draft.description,
            price: draft.price,
            currency_code: draft.currency_code,
            created_on: self.date_format.format(today),
            days_valid_for: draft.days_valid_for,
            product_id: draft.product_id,
            status,
        };

        let id = self.store.save(params).await.map_err(|e| match e {
            OfferError::PersistenceFailure(_) => e,
            other => OfferError::PersistenceFailure(other.to_string()),
        })?;
        info!(%id, %status, "Offer created");
        Ok(id)
    }

    /// Returns the offer with its status resolved against today.
    ///
    /// A changed status is written back on a best-effort basis: if the write fails the failure
    /// is logged and the resolved offer is still returned, unless the store reports that the
    /// offer reached a terminal status in the meantime, in which case that status is returned.
    /// An unreadable `createdOn` leaves the offer as stored.
    #[instrument(skip(self))]
    pub async fn get_offer(&self, id: OfferId) -> Result<Offer, OfferError> {
        let mut offer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(OfferError::NotFound(id))?;

        let resolved = match resolve_offer(&offer, self.clock.today(), &self.date_format) {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "Could not resolve offer status");
                return Ok(offer);
            }
        };

        if resolved != offer.status {
            match self.store.update_status(id, resolved).await {
                Ok(1) => debug!(from = %offer.status, to = %resolved, "Status persisted"),
                Ok(rows) => warn!(rows, to = %resolved, "Status write did not hit exactly one offer"),
                Err(OfferError::IllegalTransition { from, .. }) => {
                    // Stored status moved to a terminal state since the read
                    warn!(stored = %from, to = %resolved, "Status write rejected");
                    offer.status = from;
                    return Ok(offer);
                }
                Err(e) => warn!(error = %e, to = %resolved, "Status write failed"),
            }
            offer.status = resolved;
        }

        Ok(offer)
    }

    /// Cancels an offer. Cancelling an already cancelled offer succeeds without a write.
    #[instrument(skip(self))]
    pub async fn cancel_offer(&self, id: OfferId) -> Result<(), OfferError> {
        let offer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(OfferError::NotFound(id))?;

        if offer.status == OfferStatus::Cancelled {
            debug!("Already cancelled");
            return Ok(());
        }

        match self.store.update_status(id, OfferStatus::Cancelled).await? {
            1 => {
                info!(from = %offer.status, "Offer cancelled");
                Ok(())
            }
            0 => {
                warn!("Offer disappeared before cancellation");
                Err(OfferError::ConcurrentModification(id))
            }
            rows => {
                error!(rows, "Cancellation affected more than one offer");
                Err(OfferError::InvariantViolation { id, rows })
            }
        }
    }
}
