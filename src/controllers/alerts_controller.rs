use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    models::{is_valid_alert_type, CreateAlertRequest, UpdateAlertRequest, ALERT_TYPES},
    services::alerts_service,
    AppState,
};

fn invalid_type_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": format!("Invalid alert type. Must be one of: {}", ALERT_TYPES.join(", "))
        })),
    )
        .into_response()
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Alert not found" })),
    )
        .into_response()
}

// GET /api/alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    let resp = alerts_service::list_alerts(&state).await;
    (StatusCode::OK, Json(resp)).into_response()
}

// POST /api/alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Response {
    if !is_valid_alert_type(&req.kind) {
        return invalid_type_response();
    }

    match alerts_service::create_alert(&state, req).await {
        Ok(alert) => (StatusCode::CREATED, Json(alert)).into_response(),
        Err(e) => {
            tracing::error!("create alert failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create alert" })),
            )
                .into_response()
        }
    }
}

// GET /api/alerts/:id
pub async fn get_alert(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match alerts_service::get_alert(&state, &id).await {
        Some(alert) => (StatusCode::OK, Json(alert)).into_response(),
        None => not_found_response(),
    }
}

// PUT /api/alerts/:id
pub async fn put_update_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAlertRequest>,
) -> Response {
    if let Some(kind) = &req.kind {
        if !is_valid_alert_type(kind) {
            return invalid_type_response();
        }
    }

    match alerts_service::update_alert(&state, &id, req).await {
        Ok(Some(alert)) => (StatusCode::OK, Json(alert)).into_response(),
        Ok(None) => not_found_response(),
        Err(e) => {
            tracing::error!("update alert failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to update alert" })),
            )
                .into_response()
        }
    }
}

// DELETE /api/alerts/:id
pub async fn delete_alert(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match alerts_service::delete_alert(&state, &id).await {
        Ok(Some(alert)) => (
            StatusCode::OK,
            Json(json!({
                "message": "Alert deleted successfully",
                "alert": alert,
            })),
        )
            .into_response(),
        Ok(None) => not_found_response(),
        Err(e) => {
            tracing::error!("delete alert failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to delete alert" })),
            )
                .into_response()
        }
    }
}
