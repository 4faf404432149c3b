//! # HTTP API
//!
//! | Method | Path | Body | Success |
//! |--------|------|------|---------|
//! | `POST` | `/offer` | offer JSON | `201` with `{"id": "<id>"}` |
//! | `GET` | `/offer/{id}` | | `200` with offer JSON |
//! | `PUT` | `/offer/{id}` | `{"status": "cancelled"}` | `204` |
//!
//! Failures answer with an [`ErrorResponse`](error::ErrorResponse) body.

pub mod error;
pub mod handler;

pub use error::*;
pub use handler::*;

use crate::clients::{OfferStore, ProductCatalog};
use crate::config::HttpConfig;
use crate::service::Clock;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Builds the offer routes around a shared orchestrator.
pub fn router<S, P, C>(service: SharedService<S, P, C>) -> Router
where
    S: OfferStore + 'static,
    P: ProductCatalog + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/offer", post(create_offer::<S, P, C>))
        .route(
            "/offer/:id",
            get(get_offer::<S, P, C>).put(update_offer_status::<S, P, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serves `router` until Ctrl-C.
pub async fn serve(router: Router, config: &HttpConfig) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
