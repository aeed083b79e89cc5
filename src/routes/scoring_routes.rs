use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::scoring_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/scoring/calculate", post(scoring_controller::post_calculate_scores))
        .route("/api/scoring/symbols/:symbol", get(scoring_controller::get_symbol_score))
        .route("/api/scoring/top-performers", get(scoring_controller::get_top_performers))
        .route("/api/scoring/market-summary", get(scoring_controller::get_market_summary))
}
