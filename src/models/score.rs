use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetScore {
    pub symbol: String,
    pub overall_score: f64,
    pub momentum_score: f64,
    pub volatility_score: f64,
    pub sentiment_score: f64,

    // "strong_buy" | "buy" | "hold" | "sell"
    pub recommendation: String,
    pub last_updated: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub symbols: Vec<String>,

    #[serde(default = "default_criteria")]
    pub criteria: Vec<String>,
}

fn default_criteria() -> Vec<String> {
    vec![
        "momentum".to_string(),
        "volatility".to_string(),
        "sentiment".to_string(),
    ]
}

#[derive(Debug, Serialize)]
pub struct ScoreMetadata {
    pub calculation_time: String,
    pub criteria_used: Vec<String>,
    pub total_symbols: usize,
    pub data_source: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub scores: Vec<AssetScore>,
    pub metadata: ScoreMetadata,
}

#[derive(Debug, Serialize)]
pub struct RecommendationCounts {
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
}

#[derive(Debug, Serialize)]
pub struct MarketSummary {
    pub market_sentiment: String,
    pub average_score: f64,
    pub total_analyzed: u32,
    pub top_sector: String,
    pub volatility_index: f64,
    pub momentum_trend: String,
    pub last_updated: String,
    pub recommendations: RecommendationCounts,
}
