use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

fn upstream_error(what: &str, e: String) -> Response {
    tracing::error!("{what} lookup failed: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Error fetching {what} data") })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct StockFilter {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub min_price: Option<f64>,

    #[serde(default)]
    pub max_price: Option<f64>,
}

// POST /api/screen/stocks
pub async fn post_screen_stocks(
    State(state): State<AppState>,
    Json(filter): Json<StockFilter>,
) -> Response {
    let symbol = filter.symbol.unwrap_or_else(|| "AAPL".to_string());

    let quote = match state.market.global_quote(&symbol).await {
        Ok(Some(q)) => q,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Stock data not found" })),
            )
                .into_response();
        }
        Err(e) => return upstream_error("stock", e),
    };

    let below_min = filter.min_price.is_some_and(|min| quote.price < min);
    let above_max = filter.max_price.is_some_and(|max| quote.price > max);

    (
        StatusCode::OK,
        Json(json!({
            "symbol": symbol,
            "price": quote.price,
            "filtered_out": below_min || above_max,
        })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct ReportFilter {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default = "default_days_ahead")]
    pub days_ahead: i64,
}

fn default_days_ahead() -> i64 {
    7
}

// POST /api/reports/upcoming
pub async fn post_upcoming_reports(
    State(state): State<AppState>,
    Json(filter): Json<ReportFilter>,
) -> Response {
    let symbol = filter.symbol.unwrap_or_else(|| "AAPL".to_string());

    let events = match state.market.earnings_calendar(&symbol).await {
        Ok(events) => events,
        Err(e) => return upstream_error("earnings", e),
    };

    let today = Utc::now().date_naive();
    let threshold = today + Duration::days(filter.days_ahead);

    let upcoming: Vec<_> = events
        .into_iter()
        .filter(|ev| {
            NaiveDate::parse_from_str(&ev.report_date, "%Y-%m-%d")
                .map(|d| d >= today && d <= threshold)
                .unwrap_or(false)
        })
        .collect();

    let message = if upcoming.is_empty() {
        "No upcoming reports found"
    } else {
        ""
    };

    (
        StatusCode::OK,
        Json(json!({
            "symbol": symbol,
            "upcoming_reports": upcoming,
            "message": message,
        })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_news_limit")]
    pub limit: usize,
}

fn default_news_limit() -> usize {
    20
}

// GET /api/news/:symbol?limit=20
pub async fn get_news(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(q): Query<NewsQuery>,
) -> Response {
    let symbol = symbol.to_uppercase();

    let news = match state.market.news_sentiment(&symbol, q.limit).await {
        Ok(Some(items)) => items,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "News data not found" })),
            )
                .into_response();
        }
        Err(e) => return upstream_error("news", e),
    };

    (
        StatusCode::OK,
        Json(json!({
            "symbol": symbol,
            "total": news.len(),
            "news": news,
        })),
    )
        .into_response()
}
