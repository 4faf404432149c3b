//! # Orchestrator Collaborators
//!
//! The two seams [`OfferService`](crate::service::OfferService) is built on. The store-backed
//! clients implement them in production; tests can supply anything else.

use crate::model::{Offer, OfferCreate, OfferId, OfferStatus, ProductId};
use crate::offer_actor::OfferError;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence for offers.
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Stores a new offer and returns its assigned id.
    ///
    /// Any failure is reported as [`OfferError::PersistenceFailure`].
    async fn save(&self, offer: OfferCreate) -> Result<OfferId, OfferError>;

    /// Looks an offer up. A missing offer is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, OfferError>;

    /// Targeted status update. Returns the number of offers changed: `0` when the id matched
    /// nothing, `1` on success.
    async fn update_status(&self, id: OfferId, status: OfferStatus) -> Result<u64, OfferError>;
}

/// Product existence check used when creating offers.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn exists(&self, id: ProductId) -> Result<bool, ProductError>;
}

#[async_trait]
impl<T: OfferStore + ?Sized> OfferStore for Arc<T> {
    async fn save(&self, offer: OfferCreate) -> Result<OfferId, OfferError> {
        (**self).save(offer).await
    }

    async fn find_by_id(&self, id: OfferId) -> Result<Option<Offer>, OfferError> {
        (**self).find_by_id(id).await
    }

    async fn update_status(&self, id: OfferId, status: OfferStatus) -> Result<u64, OfferError> {
        (**self).update_status(id, status).await
    }
}

#[async_trait]
impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    async fn exists(&self, id: ProductId) -> Result<bool, ProductError> {
        (**self).exists(id).await
    }
}
