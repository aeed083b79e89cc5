pub mod alert;
pub mod score;

pub use alert::{
    Alert, AlertListResponse, CreateAlertRequest, UpdateAlertRequest, ALERT_TYPES,
    is_valid_alert_type,
};
pub use score::{AssetScore, MarketSummary, ScoreRequest, ScoreResponse};
