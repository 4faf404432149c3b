use crate::clients::{OfferClient, ProductClient};
use crate::config::OfferConfig;
use crate::product_actor::ProductError;
use crate::service::{Clock, OfferService, SystemClock};
use std::sync::Arc;
use tracing::{error, info};

/// The orchestrator built from the store-backed clients.
pub type StoreOfferService<C> = OfferService<OfferClient, ProductClient, C>;

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Catalog seeding failed: {0}")]
    Seed(#[from] ProductError),
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// The runtime orchestrator for the offer service.
///
/// `OfferSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the Offer and Product stores
/// - **Dependency Wiring**: building the [`OfferService`] from the store clients, a clock and the
///   configured date format
/// - **Catalog Seeding**: registering the products listed in `[[catalog.products]]`
///
/// # Example
///
/// ```ignore
/// let system = OfferSystem::new(&config).await?;
///
/// let id = system.offer_service.create_offer(draft).await?;
/// let offer = system.offer_service.get_offer(id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OfferSystem<C: Clock = SystemClock> {
    /// The offer use cases, shareable with request handlers
    pub offer_service: Arc<StoreOfferService<C>>,

    /// Direct access to the Offer store
    pub offer_client: OfferClient,

    /// Direct access to the Product store
    pub product_client: ProductClient,

    /// Task handles for the running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OfferSystem<SystemClock> {
    /// Starts the system against the host's calendar.
    pub async fn new(config: &OfferConfig) -> Result<Self, SystemError> {
        Self::with_clock(config, SystemClock).await
    }
}

impl<C: Clock> OfferSystem<C> {
    /// Starts both stores, seeds the catalog and wires the orchestrator.
    pub async fn with_clock(config: &OfferConfig, clock: C) -> Result<Self, SystemError> {
        let buffer_size = config.store.buffer_size;

        // 1. Create stores
        let (offer_store, offer_client) = crate::offer_actor::new(buffer_size);
        let (product_store, product_client) = crate::product_actor::new(buffer_size);

        // 2. Start them
        let offer_handle = tokio::spawn(offer_store.run());
        let product_handle = tokio::spawn(product_store.run());

        let offer_client = OfferClient::new(offer_client);
        let product_client = ProductClient::new(product_client);

        let system = Self {
            offer_service: Arc::new(OfferService::new(
                offer_client.clone(),
                product_client.clone(),
                clock,
                config.dates.format.clone(),
            )),
            offer_client,
            product_client,
            handles: vec![offer_handle, product_handle],
        };

        // 3. Seed the catalog
        for product in &config.catalog.products {
            let seeded = system
                .product_client
                .register_product(product.id, product.to_create())
                .await;
            if let Err(e) = seeded {
                error!(product_id = %product.id, error = %e, "Seeding failed");
                if let Err(shutdown_error) = system.shutdown().await {
                    error!(error = %shutdown_error, "Shutdown after failed seeding");
                }
                return Err(e.into());
            }
        }
        info!(
            products = config.catalog.products.len(),
            date_format = %config.dates.format,
            "Offer system started"
        );

        Ok(system)
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients (and the orchestrator, which holds clones of them) closes the store
    /// channels; each store then drains and exits. Handlers holding their own `Arc` of the
    /// orchestrator must be gone first, otherwise the stores keep running.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.offer_service);
        drop(self.offer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(SystemError::TaskFailed(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
