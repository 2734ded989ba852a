// Periodic refresh driver - pulls from the reading store and classifies.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::alerts::engine::derive_alerts;
use super::alerts::model::AlertRecord;
use super::model::{Reading, SensorKind};
use crate::store::{ReadingStore, StoreError};

/// Everything one refresh pass produces for the presentation layer.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// The newest sample, or None while the store is still empty
    pub latest: Option<Reading>,
    /// Recent window, most recent first, as served by the store
    pub history: Vec<Reading>,
    /// Alert feed recomputed from the history window
    pub alerts: Vec<AlertRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Chronological series of one channel over the newest `points`
    /// readings, for trend charts. Unreported samples plot as zero so the
    /// series keeps one entry per reading.
    pub fn trend(&self, kind: SensorKind, points: usize) -> Vec<f64> {
        self.history
            .iter()
            .take(points)
            .rev()
            .map(|reading| reading.value(kind).unwrap_or(0.0))
            .collect()
    }
}

/// Owns the store handle and turns each poll into a snapshot.
///
/// Carries no state between passes: every refresh recomputes the full feed
/// from the window it fetched, so overlapping calls are safe.
pub struct Coordinator {
    store: Arc<dyn ReadingStore>,
    history_limit: usize,
}

impl Coordinator {
    pub fn new(store: Arc<dyn ReadingStore>, history_limit: usize) -> Self {
        Self {
            store,
            history_limit,
        }
    }

    /// One refresh pass: latest sample, recent window, derived alert feed.
    pub async fn refresh(&self) -> Result<DashboardSnapshot, StoreError> {
        let latest = self.store.fetch_latest().await?;
        let history = self.store.fetch_history(self.history_limit).await?;
        let alerts = derive_alerts(&history);

        Ok(DashboardSnapshot {
            latest,
            history,
            alerts,
            fetched_at: Utc::now(),
        })
    }
}
