use axum::{http::{header, Request, StatusCode}, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use stockalert::{config, models::Alert, routes::alerts_routes, services, storage, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut settings = config::load();
    settings.alerts_file = dir
        .path()
        .join("alerts.json")
        .to_string_lossy()
        .to_string();
    settings.alphavantage_api_key = String::new();

    let store = storage::AlertStore::new(&settings.alerts_file);
    let market =
        services::alphavantage::AlphaVantageClient::new(settings.alphavantage_api_key.clone());

    let state = AppState {
        settings: settings.clone(),
        store,
        market,
    };

    (state, dir)
}

fn app(state: AppState) -> Router {
    alerts_routes::add_routes(Router::new()).with_state(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

async fn response_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_alert(app: &Router, asset_id: &str, kind: &str, target_value: f64) -> Alert {
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            json!({ "asset_id": asset_id, "type": kind, "target_value": target_value }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    serde_json::from_value(response_json(res).await).unwrap()
}

#[tokio::test]
async fn create_alert_returns_full_record() {
    let (state, _dir) = test_state();
    let app = app(state);

    let alert = create_alert(&app, "X", "price_above", 100.0).await;

    assert!(!alert.id.is_empty());
    assert_eq!(alert.asset_id, "X");
    assert_eq!(alert.asset_symbol, "SYMBOL_X");
    assert_eq!(alert.kind, "price_above");
    assert_eq!(alert.target_value, 100.0);
    assert!(alert.is_active);
    assert!(!alert.created_at.is_empty());
    assert!(alert.triggered_at.is_none());
}

#[tokio::test]
async fn create_alert_rejects_unknown_type() {
    let (state, _dir) = test_state();
    let app = app(state);

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/alerts",
            json!({ "asset_id": "X", "type": "bogus", "target_value": 100.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = response_json(res).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("price_above"));
    assert!(error.contains("price_below"));
    assert!(error.contains("percentage_change"));

    // nothing was written
    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    let body = response_json(res).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn created_alert_roundtrips_through_get() {
    let (state, _dir) = test_state();
    let app = app(state);

    let created = create_alert(&app, "X", "price_below", 42.5).await;

    let res = app
        .oneshot(get_request(&format!("/api/alerts/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Alert = serde_json::from_value(response_json(res).await).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_alert_is_not_found() {
    let (state, _dir) = test_state();
    let app = app(state);

    let res = app.oneshot(get_request("/api/alerts/nonexistent")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert_eq!(body["error"], "Alert not found");
}

#[tokio::test]
async fn update_changes_only_the_given_field() {
    let (state, _dir) = test_state();
    let app = app(state);

    let created = create_alert(&app, "X", "price_above", 100.0).await;

    let res = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/alerts/{}", created.id),
            json!({ "target_value": 200.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let updated: Alert = serde_json::from_value(response_json(res).await).unwrap();
    assert_eq!(updated.target_value, 200.0);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.asset_id, created.asset_id);
    assert_eq!(updated.asset_symbol, created.asset_symbol);
    assert_eq!(updated.kind, created.kind);
    assert_eq!(updated.is_active, created.is_active);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.triggered_at, created.triggered_at);
}

#[tokio::test]
async fn update_asset_id_recomputes_symbol() {
    let (state, _dir) = test_state();
    let app = app(state);

    let created = create_alert(&app, "X", "price_above", 100.0).await;

    let res = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/alerts/{}", created.id),
            json!({ "asset_id": "Y" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let updated: Alert = serde_json::from_value(response_json(res).await).unwrap();
    assert_eq!(updated.asset_id, "Y");
    assert_eq!(updated.asset_symbol, "SYMBOL_Y");
    assert_eq!(updated.target_value, created.target_value);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_rejects_unknown_type() {
    let (state, _dir) = test_state();
    let app = app(state);

    let created = create_alert(&app, "X", "price_above", 100.0).await;

    let res = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/alerts/{}", created.id),
            json!({ "type": "bogus" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // record untouched
    let res = app
        .oneshot(get_request(&format!("/api/alerts/{}", created.id)))
        .await
        .unwrap();
    let fetched: Alert = serde_json::from_value(response_json(res).await).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_unknown_alert_is_not_found() {
    let (state, _dir) = test_state();
    let app = app(state);

    let res = app
        .oneshot(json_request(
            "PUT",
            "/api/alerts/nonexistent",
            json!({ "target_value": 1.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_alert_and_is_not_repeatable() {
    let (state, _dir) = test_state();
    let app = app(state);

    let created = create_alert(&app, "X", "price_above", 100.0).await;
    let uri = format!("/api/alerts/{}", created.id);

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["message"], "Alert deleted successfully");
    assert_eq!(body["alert"]["id"], created.id);

    let res = app.clone().oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // a second delete reports not-found too
    let res = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_total_matches_alert_count() {
    let (state, _dir) = test_state();
    let app = app(state);

    create_alert(&app, "A", "price_above", 1.0).await;
    create_alert(&app, "B", "price_below", 2.0).await;
    create_alert(&app, "C", "percentage_change", 3.0).await;

    let res = app.oneshot(get_request("/api/alerts")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    let alerts = body["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 3);
    assert_eq!(body["total"], 3);
}
