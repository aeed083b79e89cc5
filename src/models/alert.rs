use serde::{Deserialize, Serialize};

/// The closed set of alert kinds the API accepts.
pub const ALERT_TYPES: [&str; 3] = ["price_above", "price_below", "percentage_change"];

pub fn is_valid_alert_type(t: &str) -> bool {
    ALERT_TYPES.contains(&t)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,

    pub asset_id: String,
    // always derived from asset_id, never taken from the request
    pub asset_symbol: String,

    // "price_above" | "price_below" | "percentage_change"
    #[serde(rename = "type")]
    pub kind: String,
    pub target_value: f64,

    pub is_active: bool,

    pub created_at: String,

    // set by a future trigger evaluator, omitted from JSON until then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    pub asset_id: String,

    #[serde(rename = "type")]
    pub kind: String,
    pub target_value: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAlertRequest {
    #[serde(default)]
    pub asset_id: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub target_value: Option<f64>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlertListResponse {
    pub alerts: Vec<Alert>,
    pub total: usize,
}
