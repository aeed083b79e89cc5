use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod alerts_routes;
pub mod scoring_routes;
pub mod screener_routes;
pub mod realtime_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = scoring_routes::add_routes(router);
    let router = screener_routes::add_routes(router);
    let router = realtime_routes::add_routes(router);

    let cors = CorsLayer::new()
        .allow_origin(
            state
                .settings
                .cors_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000")),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    router
        .fallback(home_controller::not_found)
        .layer(cors)
        .with_state(state)
}
