//! # Offer Client
//!
//! Provides a high-level API for interacting with the Offer store.
//! It wraps a `StoreClient<Offer>` and exposes the [`OfferStore`] operations.
use crate::clients::traits::OfferStore;
use crate::model::{Offer, OfferCreate, OfferId, OfferStatus};
use crate::offer_actor::{OfferAction, OfferActionResult, OfferError};
use async_trait::async_trait;
use record_store::{StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the Offer store.
#[derive(Clone)]
pub struct OfferClient {
    inner: StoreClient<Offer>,
}

impl OfferClient {
    pub fn new(inner: StoreClient<Offer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Offer> for OfferClient {
    type Error = OfferError;

    fn inner(&self) -> &StoreClient<Offer> {
        &self.inner
    }

    /// Record errors come back as the [`OfferError`] the record raised. Anything else is a
    /// persistence failure.
    fn map_error(e: StoreError) -> Self::Error {
        match e.into_record_error::<OfferError>() {
            Ok(offer_error) => offer_error,
            Err(other) => OfferError::PersistenceFailure(other.to_string()),
        }
    }
}

#[async_trait]
impl OfferStore for OfferClient {
    #[instrument(skip(self, offer), fields(product_id = %offer.product_id))]
    async fn save(&self, offer: OfferCreate) -> Result<OfferId, OfferError> {
        debug!("Sending request");
        self.inner
            .create(offer)
            .await
            .map_err(|e| OfferError::PersistenceFailure(e.to_string()))
    }

    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, OfferError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: OfferId, status: OfferStatus) -> Result<u64, OfferError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OfferAction::SetStatus(status))
            .await
        {
            Ok(OfferActionResult::SetStatus(previous)) => {
                debug!(%previous, "Status updated");
                Ok(1)
            }
            Err(StoreError::NotFound(_)) => Ok(0),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
