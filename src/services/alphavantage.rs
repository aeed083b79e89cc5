use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://www.alphavantage.co/query";

#[derive(Clone)]
pub struct AlphaVantageClient {
    http: Client,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    /// Ok(None) means the upstream answered but carried no quote payload
    /// (unknown symbol, or the rate-limit notice body).
    pub async fn global_quote(&self, symbol: &str) -> Result<Option<GlobalQuote>, String> {
        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Alpha Vantage quote failed: {status} {body}"));
        }

        let envelope = res
            .json::<GlobalQuoteEnvelope>()
            .await
            .map_err(|e| e.to_string())?;

        // unknown symbols come back as a missing or empty "Global Quote" object
        let Some(raw) = envelope.global_quote else {
            return Ok(None);
        };
        if raw.price.trim().is_empty() {
            return Ok(None);
        }

        let price = raw.price.trim().parse::<f64>().map_err(|e| e.to_string())?;
        let change = raw.change.trim().parse::<f64>().unwrap_or(0.0);

        Ok(Some(GlobalQuote {
            symbol: raw.symbol,
            price,
            change,
        }))
    }

    /// The earnings calendar endpoint answers CSV, not JSON.
    pub async fn earnings_calendar(&self, symbol: &str) -> Result<Vec<EarningsEvent>, String> {
        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("function", "EARNINGS_CALENDAR"),
                ("symbol", symbol),
                ("horizon", "3month"),
                ("apikey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Alpha Vantage earnings failed: {status} {body}"));
        }

        let csv = res.text().await.map_err(|e| e.to_string())?;
        Ok(parse_earnings_csv(&csv))
    }

    /// Ok(None) means the upstream answered but carried no news feed.
    pub async fn news_sentiment(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Option<Vec<NewsItem>>, String> {
        let limit = limit.to_string();
        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("function", "NEWS_SENTIMENT"),
                ("tickers", symbol),
                ("limit", limit.as_str()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Alpha Vantage news failed: {status} {body}"));
        }

        let envelope = res
            .json::<NewsEnvelope>()
            .await
            .map_err(|e| e.to_string())?;

        let Some(feed) = envelope.feed else {
            return Ok(None);
        };

        let items = feed.into_iter().map(NewsItem::from).collect();
        Ok(Some(items))
    }
}

/// Columns are located by header name; the feed occasionally reorders them.
pub fn parse_earnings_csv(csv: &str) -> Vec<EarningsEvent> {
    let mut lines = csv.lines();

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns: Vec<&str> = header.split(',').map(|c| c.trim()).collect();

    let col = |name: &str| columns.iter().position(|c| *c == name);
    let (Some(sym_idx), Some(date_idx)) = (col("symbol"), col("reportDate")) else {
        return Vec::new();
    };
    let estimate_idx = col("estimate");

    lines
        .filter_map(|line| {
            let parts: Vec<&str> = line.split(',').collect();
            let symbol = parts.get(sym_idx)?.trim();
            let report_date = parts.get(date_idx)?.trim();
            if symbol.is_empty() || report_date.is_empty() {
                return None;
            }

            let estimate = estimate_idx
                .and_then(|i| parts.get(i))
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .unwrap_or("N/A");

            Some(EarningsEvent {
                symbol: symbol.to_string(),
                report_date: report_date.to_string(),
                estimate: estimate.to_string(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobalQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EarningsEvent {
    pub symbol: String,
    pub report_date: String,
    pub estimate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: String,
    pub sentiment: String,
    pub sentiment_score: f64,
}

// ---- raw upstream shapes ----

#[derive(Debug, Deserialize)]
struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    global_quote: Option<RawGlobalQuote>,
}

#[derive(Debug, Deserialize)]
struct RawGlobalQuote {
    #[serde(rename = "01. symbol", default)]
    symbol: String,

    #[serde(rename = "05. price", default)]
    price: String,

    #[serde(rename = "09. change", default)]
    change: String,
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    feed: Option<Vec<RawNewsItem>>,
}

#[derive(Debug, Deserialize)]
struct RawNewsItem {
    #[serde(default)]
    title: String,

    #[serde(default)]
    url: String,

    #[serde(default)]
    source: String,

    #[serde(default)]
    time_published: String,

    #[serde(default)]
    overall_sentiment_label: String,

    #[serde(default)]
    overall_sentiment_score: f64,
}

impl From<RawNewsItem> for NewsItem {
    fn from(raw: RawNewsItem) -> Self {
        NewsItem {
            title: raw.title,
            url: raw.url,
            source: raw.source,
            published_at: raw.time_published,
            sentiment: raw.overall_sentiment_label.to_lowercase(),
            sentiment_score: raw.overall_sentiment_score,
        }
    }
}
