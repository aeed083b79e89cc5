use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    models::score::{ScoreMetadata, ScoreRequest, ScoreResponse},
    services::scoring_service,
    AppState,
};

// POST /api/scoring/calculate
pub async fn post_calculate_scores(
    State(_state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Response {
    let scores = scoring_service::calculate_scores(&req.symbols);

    let resp = ScoreResponse {
        metadata: ScoreMetadata {
            calculation_time: Utc::now().to_rfc3339(),
            criteria_used: req.criteria,
            total_symbols: req.symbols.len(),
            data_source: "mock_data".to_string(),
            version: "1.0.0".to_string(),
        },
        scores,
    };

    (StatusCode::OK, Json(resp)).into_response()
}

// GET /api/scoring/symbols/:symbol
pub async fn get_symbol_score(
    State(_state): State<AppState>,
    Path(symbol): Path<String>,
) -> Response {
    let score = scoring_service::score_symbol(&symbol);
    (StatusCode::OK, Json(score)).into_response()
}

#[derive(Deserialize)]
pub struct TopPerformersQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

// GET /api/scoring/top-performers?limit=10
pub async fn get_top_performers(
    State(_state): State<AppState>,
    Query(q): Query<TopPerformersQuery>,
) -> Response {
    let performers = scoring_service::top_performers(q.limit);
    (StatusCode::OK, Json(performers)).into_response()
}

// GET /api/scoring/market-summary
pub async fn get_market_summary(State(_state): State<AppState>) -> Response {
    (StatusCode::OK, Json(scoring_service::market_summary())).into_response()
}
