//! Request handlers for `/offer`.

use crate::clients::{OfferStore, ProductCatalog};
use crate::http::error::ApiError;
use crate::model::{Offer, OfferDraft, OfferId, OfferStatus};
use crate::offer_actor::OfferError;
use crate::service::{Clock, OfferService};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub type SharedService<S, P, C> = Arc<OfferService<S, P, C>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

fn offer_id(path: Result<Path<u64>, PathRejection>) -> Result<OfferId, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(OfferId(id))
}

/// `POST /offer`
pub async fn create_offer<S, P, C>(
    State(service): State<SharedService<S, P, C>>,
    payload: Result<Json<OfferDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError>
where
    S: OfferStore + 'static,
    P: ProductCatalog + 'static,
    C: Clock + 'static,
{
    let Json(draft) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let id = service.create_offer(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    ))
}

/// `GET /offer/{id}`
pub async fn get_offer<S, P, C>(
    State(service): State<SharedService<S, P, C>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Offer>, ApiError>
where
    S: OfferStore + 'static,
    P: ProductCatalog + 'static,
    C: Clock + 'static,
{
    let id = offer_id(path)?;
    Ok(Json(service.get_offer(id).await?))
}

/// `PUT /offer/{id}` with `{"status": "cancelled"}`. Cancellation is the only update a client
/// may request.
pub async fn update_offer_status<S, P, C>(
    State(service): State<SharedService<S, P, C>>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    S: OfferStore + 'static,
    P: ProductCatalog + 'static,
    C: Clock + 'static,
{
    let id = offer_id(path)?;
    let Json(update) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let status = update.status.parse::<OfferStatus>().map_err(|e| {
        warn!(%id, error = %e, "Unrecognized status in update");
        OfferError::from(e)
    })?;
    if status != OfferStatus::Cancelled {
        return Err(ApiError::BadRequest(format!(
            "status {:?} cannot be requested, only \"cancelled\"",
            status.as_str()
        )));
    }

    service.cancel_offer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
