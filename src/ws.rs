use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tokio::time::{interval, Duration};

use crate::{services::alphavantage::AlphaVantageClient, AppState};

#[derive(Deserialize)]
pub struct PricesWsQuery {
    pub symbol: String,
}

// GET /ws/prices?symbol=AAPL
pub async fn ws_prices(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(q): Query<PricesWsQuery>,
) -> impl IntoResponse {
    let symbol = q.symbol.trim().to_uppercase();

    if symbol.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing symbol").into_response();
    }

    let market = state.market.clone();
    ws.on_upgrade(move |socket| handle_prices_socket(socket, symbol, market))
}

async fn handle_prices_socket(mut client_ws: WebSocket, symbol: String, market: AlphaVantageClient) {
    tracing::info!("WS client connected: symbol={}", symbol);

    let mut poll = interval(Duration::from_secs(5));
    let mut ping = interval(Duration::from_secs(25));

    loop {
        tokio::select! {
            _ = poll.tick() => {
                let frame = match market.global_quote(&symbol).await {
                    Ok(Some(quote)) => serde_json::json!({
                        "type": "price",
                        "symbol": quote.symbol,
                        "price": quote.price,
                        "change": quote.change,
                        "timestamp": Utc::now().to_rfc3339(),
                    }),
                    Ok(None) => serde_json::json!({
                        "type": "error",
                        "message": format!("no quote data for {symbol}"),
                    }),
                    Err(err) => {
                        tracing::warn!("quote poll failed for {}: {}", symbol, err);
                        serde_json::json!({
                            "type": "error",
                            "message": "quote lookup failed",
                        })
                    }
                };

                if client_ws.send(Message::Text(frame.to_string())).await.is_err() {
                    break;
                }
            }

            _ = ping.tick() => {
                if client_ws.send(Message::Ping(b"ping".to_vec())).await.is_err() {
                    break;
                }
            }

            client_msg = client_ws.recv() => {
                match client_msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    let _ = client_ws.close().await;
    tracing::info!("WS client disconnected: symbol={}", symbol);
}
