use chrono::Utc;
use rand::Rng;

use crate::models::score::{MarketSummary, RecommendationCounts};
use crate::models::AssetScore;

const TOP_SYMBOLS: [&str; 10] = [
    "AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA", "META", "NFLX", "AMD", "CRM",
];

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn recommendation_for(overall: f64) -> &'static str {
    if overall >= 0.8 {
        "strong_buy"
    } else if overall >= 0.6 {
        "buy"
    } else if overall >= 0.4 {
        "hold"
    } else {
        "sell"
    }
}

/// Synthetic scores. There is no model behind this; each factor is drawn
/// uniformly and the overall score is their mean.
pub fn score_symbol(symbol: &str) -> AssetScore {
    let mut rng = rand::thread_rng();

    let momentum = round2(rng.gen_range(0.1..=1.0));
    let volatility = round2(rng.gen_range(0.1..=1.0));
    let sentiment = round2(rng.gen_range(0.1..=1.0));
    let overall = round2((momentum + volatility + sentiment) / 3.0);

    AssetScore {
        symbol: symbol.to_uppercase(),
        overall_score: overall,
        momentum_score: momentum,
        volatility_score: volatility,
        sentiment_score: sentiment,
        recommendation: recommendation_for(overall).to_string(),
        last_updated: Utc::now().to_rfc3339(),
    }
}

pub fn calculate_scores(symbols: &[String]) -> Vec<AssetScore> {
    symbols.iter().map(|s| score_symbol(s)).collect()
}

/// Fixed universe with ramped base scores, best first.
pub fn top_performers(limit: usize) -> Vec<AssetScore> {
    let mut rng = rand::thread_rng();

    let mut performers: Vec<AssetScore> = TOP_SYMBOLS
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, symbol)| {
            let base = 0.7 + (i as f64) * 0.02;

            let momentum = round2((base + rng.gen_range(0.0..0.2)).min(1.0));
            let volatility = round2((base + rng.gen_range(0.0..0.15)).min(1.0));
            let sentiment = round2((base + rng.gen_range(0.0..0.15)).min(1.0));
            let overall = round2((momentum + volatility + sentiment) / 3.0);

            AssetScore {
                symbol: (*symbol).to_string(),
                overall_score: overall,
                momentum_score: momentum,
                volatility_score: volatility,
                sentiment_score: sentiment,
                recommendation: if overall >= 0.6 { "buy" } else { "hold" }.to_string(),
                last_updated: Utc::now().to_rfc3339(),
            }
        })
        .collect();

    performers.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    performers
}

pub fn market_summary() -> MarketSummary {
    MarketSummary {
        market_sentiment: "bullish".to_string(),
        average_score: 0.72,
        total_analyzed: 500,
        top_sector: "technology".to_string(),
        volatility_index: 0.35,
        momentum_trend: "positive".to_string(),
        last_updated: Utc::now().to_rfc3339(),
        recommendations: RecommendationCounts {
            strong_buy: 45,
            buy: 125,
            hold: 200,
            sell: 130,
        },
    }
}
