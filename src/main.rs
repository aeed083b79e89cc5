use std::net::SocketAddr;

use stockalert::{config, routes, services, storage, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let store = storage::AlertStore::new(&settings.alerts_file);
    let market =
        services::alphavantage::AlphaVantageClient::new(settings.alphavantage_api_key.clone());

    let state = AppState {
        settings: settings.clone(),
        store,
        market,
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
