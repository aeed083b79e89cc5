use axum::{Router, routing::get};
use crate::{ws, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/ws/prices", get(ws::ws_prices))
}
