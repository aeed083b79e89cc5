use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::screener_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/screen/stocks", post(screener_controller::post_screen_stocks))
        .route("/api/reports/upcoming", post(screener_controller::post_upcoming_reports))
        .route("/api/news/:symbol", get(screener_controller::get_news))
}
