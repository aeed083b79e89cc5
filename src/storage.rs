use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Alert;

/// File-backed alert store. Every operation re-reads and re-writes the whole
/// collection; the mutex serializes the load -> mutate -> save section so
/// concurrent requests cannot lose each other's writes.
#[derive(Clone)]
pub struct AlertStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl AlertStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load_all(&self) -> Vec<Alert> {
        let _guard = self.lock.lock().await;
        self.read_file().await
    }

    pub async fn save_all(&self, alerts: &[Alert]) -> Result<(), String> {
        let _guard = self.lock.lock().await;
        self.write_file(alerts).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Alert> {
        let _guard = self.lock.lock().await;
        self.read_file().await.into_iter().find(|a| a.id == id)
    }

    pub async fn add(&self, alert: Alert) -> Result<(), String> {
        let _guard = self.lock.lock().await;
        let mut alerts = self.read_file().await;
        alerts.push(alert);
        self.write_file(&alerts).await
    }

    /// Replaces the alert with a matching id. Returns false (and writes
    /// nothing) when no record matches.
    pub async fn update(&self, id: &str, updated: Alert) -> Result<bool, String> {
        let _guard = self.lock.lock().await;
        let mut alerts = self.read_file().await;

        let Some(slot) = alerts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        *slot = updated;

        self.write_file(&alerts).await?;
        Ok(true)
    }

    /// Removes the alert with a matching id. Returns false (and writes
    /// nothing) when no record matches.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, String> {
        let _guard = self.lock.lock().await;
        let alerts = self.read_file().await;
        let before = alerts.len();

        let remaining: Vec<Alert> = alerts.into_iter().filter(|a| a.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        self.write_file(&remaining).await?;
        Ok(true)
    }

    // -------- file primitives (callers hold the lock) --------

    /// Missing file and unparseable file both read as the empty collection;
    /// the corrupt case is logged so it is distinguishable from empty.
    async fn read_file(&self) -> Vec<Alert> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<Vec<Alert>>(&raw) {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!("alerts file {} unreadable, treating as empty: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn write_file(&self, alerts: &[Alert]) -> Result<(), String> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }

        let json = serde_json::to_string_pretty(alerts).map_err(|e| e.to_string())?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }
}
