use offer_service::config::OfferConfig;
use offer_service::http;
use offer_service::lifecycle::{setup_tracing, OfferSystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = OfferConfig::load()?;
    config.validate()?;

    setup_tracing(&config.logging.level);
    match &source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => info!("No configuration file found, using defaults"),
    }

    let system = OfferSystem::new(&config).await?;

    let router = http::router(system.offer_service.clone());
    let served = http::serve(router, &config.http).await;
    if let Err(e) = &served {
        error!(error = %e, "HTTP server failed");
    }

    system.shutdown().await?;
    served?;
    info!("Offer service stopped");
    Ok(())
}
