use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use offer_service::config::{HttpConfig, OfferConfig};
use offer_service::http::{router, serve, CreatedResponse, ErrorResponse};
use offer_service::lifecycle::OfferSystem;
use offer_service::service::FixedClock;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn start() -> (OfferSystem<FixedClock>, Router) {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let system = OfferSystem::with_clock(&OfferConfig::default(), FixedClock(today))
        .await
        .unwrap();
    let app = router(system.offer_service.clone());
    (system, app)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn offer_json(product_id: u64) -> Value {
    json!({
        "description": "20% off the sample product",
        "price": 100,
        "currencyCode": "EUR",
        "daysValidFor": 20,
        "productID": product_id
    })
}

async fn create(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/offer", Some(offer_json(4621346))).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: CreatedResponse = serde_json::from_slice(&body).unwrap();
    created.id
}

#[tokio::test]
async fn test_create_get_cancel() {
    let (system, app) = start().await;

    let id = create(&app).await;
    assert_eq!(id, "1");

    let (status, body) = send(&app, "GET", &format!("/offer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let offer: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(offer["id"], 1);
    assert_eq!(offer["createdOn"], "19/10/2026");
    assert_eq!(offer["status"], "valid");
    assert_eq!(offer["productID"], 4621346);
    assert_eq!(offer["currencyCode"], "EUR");
    assert_eq!(offer["daysValidFor"], 20);

    let cancel = json!({ "status": "cancelled" });
    let (status, body) = send(&app, "PUT", &format!("/offer/{id}"), Some(cancel.clone())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = send(&app, "GET", &format!("/offer/{id}"), None).await;
    let offer: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(offer["status"], "cancelled");

    let (status, _) = send(&app, "PUT", &format!("/offer/{id}"), Some(cancel)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_server_fields_in_body_are_ignored() {
    let (system, app) = start().await;

    let mut body = offer_json(4621346);
    body["id"] = json!(500);
    body["createdOn"] = json!("01/01/1980");
    body["status"] = json!("expired");

    let (status, response) = send(&app, "POST", "/offer", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: CreatedResponse = serde_json::from_slice(&response).unwrap();

    let (_, response) = send(&app, "GET", &format!("/offer/{}", created.id), None).await;
    let offer: Value = serde_json::from_slice(&response).unwrap();
    assert_eq!(offer["id"], 1);
    assert_eq!(offer["createdOn"], "19/10/2026");
    assert_eq!(offer["status"], "valid");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_offer_is_404() {
    let (system, app) = start().await;

    let (status, body) = send(&app, "GET", "/offer/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "NOT_FOUND");
    assert_eq!(error.code, 404);

    let (status, _) = send(
        &app,
        "PUT",
        "/offer/77",
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_product_is_400() {
    let (system, app) = start().await;

    let (status, body) = send(&app, "POST", "/offer", Some(offer_json(1111111111))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "INVALID_PRODUCT");

    let (status, _) = send(&app, "GET", "/offer/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bad_requests() {
    let (system, app) = start().await;
    let id = create(&app).await;
    let uri = format!("/offer/{id}");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "status": "archived" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "UNRECOGNIZED_STATUS");

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "status": "valid" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut missing_currency = offer_json(4621346);
    missing_currency["currencyCode"] = json!("");
    let (status, body) = send(&app, "POST", "/offer", Some(missing_currency)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "VALIDATION");

    let (status, _) = send(&app, "POST", "/offer", Some(json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/offer/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The offer is untouched by the rejected updates
    let (_, body) = send(&app, "GET", &uri, None).await;
    let offer: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(offer["status"], "valid");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_serve_reports_unusable_address() {
    let (system, app) = start().await;

    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();
    let in_use = HttpConfig {
        bind_address: "127.0.0.1".to_string(),
        port,
    };
    assert!(serve(app.clone(), &in_use).await.is_err());

    let unresolvable = HttpConfig {
        bind_address: "not an address".to_string(),
        port: 8080,
    };
    assert!(serve(app, &unresolvable).await.is_err());

    drop(taken);
    system.shutdown().await.unwrap();
}
