//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! The format is compact and hides the module prefix (`with_target(false)`); stores tag their
//! lines with a `record_type` field instead. `RUST_LOG` wins when set, otherwise the configured
//! level applies:
//!
//! ```bash
//! RUST_LOG=info cargo run                                  # request and lifecycle events
//! RUST_LOG=debug cargo run                                 # store payloads and status writes
//! RUST_LOG=offer_service=debug,tower_http=info cargo run   # per-crate levels
//! ```
//!
//! A typical `GET /offer/1` on an offer that just expired, at `debug`:
//!
//! ```text
//! DEBUG request{method=GET uri=/offer/1}:get_offer{id=OfferId(1)}:get{id=OfferId(1)}: Sending request
//! DEBUG Get record_type="Offer" id=1 found=true
//! DEBUG request{method=GET uri=/offer/1}:get_offer{id=OfferId(1)}:update_status{id=OfferId(1) status=Expired}: Sending request
//!  INFO Action ok record_type="Offer" id=1
//! DEBUG request{method=GET uri=/offer/1}:get_offer{id=OfferId(1)}: Status persisted from=valid to=expired
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, before the system starts.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
