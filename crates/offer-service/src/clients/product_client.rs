//! # Product Client
//!
//! Provides a high-level API for interacting with the Product store.
//! It wraps a `StoreClient<Product>` and answers the [`ProductCatalog`] existence check.
use crate::clients::traits::ProductCatalog;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use record_store::{StoreClient, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreHandle<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e.into_record_error::<ProductError>() {
            Ok(product_error) => product_error,
            Err(other) => ProductError::StoreCommunication(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Adds a product under a store-assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Adds a product under a fixed id, as catalog seeding does.
    #[instrument(skip(self))]
    pub async fn register_product(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        match self.inner.insert(id, params).await {
            Ok(id) => Ok(id),
            Err(StoreError::Conflict(_)) => Err(ProductError::Conflict(id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    async fn exists(&self, id: ProductId) -> Result<bool, ProductError> {
        <Self as StoreHandle<Product>>::exists(self, id).await
    }
}
