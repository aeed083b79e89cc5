use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;

// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Stock Alert Backend",
        "version": "1.0.0",
        "endpoints": {
            "health": "/health",
            "alerts": {
                "list": "GET /api/alerts",
                "create": "POST /api/alerts",
                "get": "GET /api/alerts/:id",
                "update": "PUT /api/alerts/:id",
                "delete": "DELETE /api/alerts/:id"
            },
            "scoring": {
                "calculate": "POST /api/scoring/calculate",
                "symbol": "GET /api/scoring/symbols/:symbol",
                "top_performers": "GET /api/scoring/top-performers",
                "market_summary": "GET /api/scoring/market-summary"
            },
            "market": {
                "screen": "POST /api/screen/stocks",
                "reports": "POST /api/reports/upcoming",
                "news": "GET /api/news/:symbol"
            },
            "realtime": "GET /ws/prices?symbol=AAPL"
        }
    }))
}

// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": "1.0.0",
    }))
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Route {uri} not found"),
        })),
    )
}
