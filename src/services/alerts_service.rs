use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::{Alert, AlertListResponse, CreateAlertRequest, UpdateAlertRequest},
    AppState,
};

/// Symbols are always derived from the asset id, never supplied by callers.
pub fn derive_symbol(asset_id: &str) -> String {
    format!("SYMBOL_{asset_id}")
}

pub async fn list_alerts(state: &AppState) -> AlertListResponse {
    let alerts = state.store.load_all().await;
    let total = alerts.len();

    AlertListResponse { alerts, total }
}

pub async fn create_alert(state: &AppState, req: CreateAlertRequest) -> Result<Alert, String> {
    let alert = Alert {
        id: Uuid::new_v4().to_string(),
        asset_symbol: derive_symbol(&req.asset_id),
        asset_id: req.asset_id,
        kind: req.kind,
        target_value: req.target_value,
        is_active: true,
        created_at: Utc::now().to_rfc3339(),
        triggered_at: None,
    };

    state.store.add(alert.clone()).await?;

    Ok(alert)
}

pub async fn get_alert(state: &AppState, id: &str) -> Option<Alert> {
    state.store.get_by_id(id).await
}

/// Overlays only the fields present in the request onto the stored record.
/// Ok(None) means no such alert; Err means the store failed, including the
/// record vanishing between the fetch and the write.
pub async fn update_alert(
    state: &AppState,
    id: &str,
    req: UpdateAlertRequest,
) -> Result<Option<Alert>, String> {
    let Some(existing) = state.store.get_by_id(id).await else {
        return Ok(None);
    };

    let mut updated = existing;

    if let Some(asset_id) = req.asset_id {
        updated.asset_symbol = derive_symbol(&asset_id);
        updated.asset_id = asset_id;
    }
    if let Some(kind) = req.kind {
        updated.kind = kind;
    }
    if let Some(target_value) = req.target_value {
        updated.target_value = target_value;
    }
    if let Some(is_active) = req.is_active {
        updated.is_active = is_active;
    }

    let matched = state.store.update(id, updated.clone()).await?;
    if !matched {
        // fetched fine a moment ago, so a concurrent delete beat us
        return Err(format!("alert {id} disappeared during update"));
    }

    Ok(Some(updated))
}

/// Ok(None) means no such alert; the removed record is echoed back on success.
pub async fn delete_alert(state: &AppState, id: &str) -> Result<Option<Alert>, String> {
    let Some(existing) = state.store.get_by_id(id).await else {
        return Ok(None);
    };

    let matched = state.store.delete_by_id(id).await?;
    if !matched {
        return Ok(None);
    }

    Ok(Some(existing))
}
