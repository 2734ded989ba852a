// Dashboard shell - drives the periodic refresh and renders to the log.
//
// The terminal is the presentation layer here: each pass logs the vitals
// row, the ambient row, and the alert feed the same way the tabbed UI
// lays them out.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::time::{sleep, Duration};

use crate::core::config::{ConfigManager, Settings};
use crate::core::coordinator::{Coordinator, DashboardSnapshot};
use crate::core::format::{alert_message, format_clock, format_value, time_ago};
use crate::core::model::SensorKind;
use crate::core::ranges::classify;
use crate::store::PostgresStore;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let config_manager = ConfigManager::new(config_dir());
    let settings = config_manager.load();
    if settings.database_url.is_empty() {
        error!("No reading store configured. Set DATABASE_URL or edit settings.json");
        return Err("DATABASE_URL not set".into());
    }

    let store = Arc::new(PostgresStore::new(settings.database_url.clone()));
    let coordinator = Coordinator::new(store, settings.history_limit);

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        let _ = tx.send(());
    });

    tokio::select! {
        result = poll_loop(&coordinator, &settings) => result,
        _ = &mut rx => {
            info!("Dashboard stopped by user. Exiting gracefully.");
            Ok(())
        }
    }
}

fn config_dir() -> PathBuf {
    std::env::var("VITAL_WATCHER_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

async fn poll_loop(
    coordinator: &Coordinator,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Starting VitalWatcher dashboard (refresh every {}s, alert window {} readings)",
        settings.poll_interval_secs, settings.history_limit
    );

    loop {
        match coordinator.refresh().await {
            Ok(snapshot) => render(&snapshot, settings),
            Err(e) => error!("Refresh failed: {}", e),
        }

        sleep(Duration::from_secs(settings.poll_interval_secs)).await;
    }
}

fn render(snapshot: &DashboardSnapshot, settings: &Settings) {
    match &snapshot.latest {
        Some(reading) => {
            info!(
                "Last updated {} ({})",
                time_ago(snapshot.fetched_at, reading.recorded_at),
                format_clock(&reading.recorded_at)
            );
            for kind in SensorKind::all() {
                let value = reading.value(*kind);
                let status = match value {
                    Some(v) => classify(*kind, v).as_str(),
                    None => "n/a",
                };
                info!(
                    "  {} {:<12} {:>10}  [{}]",
                    kind.glyph(),
                    kind.display_name(),
                    format_value(*kind, value),
                    status
                );
            }
        }
        None => warn!("No sensor data yet"),
    }

    if snapshot.alerts.is_empty() {
        info!("Alerts: all clear");
    } else {
        info!("Alerts: {} active", snapshot.alerts.len());
        for alert in &snapshot.alerts {
            info!(
                "  [{}] {}",
                format_clock(&alert.timestamp),
                alert_message(alert)
            );
        }
    }

    for kind in [SensorKind::HeartRate, SensorKind::Spo2, SensorKind::BodyTemp] {
        debug!(
            "{} trend: {:?}",
            kind.display_name(),
            snapshot.trend(kind, settings.trend_points)
        );
    }
}
