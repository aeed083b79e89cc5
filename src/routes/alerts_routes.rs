use axum::{Router, routing::get};
use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/alerts",
            get(alerts_controller::get_alerts).post(alerts_controller::post_create_alert),
        )
        .route(
            "/api/alerts/:id",
            get(alerts_controller::get_alert)
                .put(alerts_controller::put_update_alert)
                .delete(alerts_controller::delete_alert),
        )
}
