use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dashboard settings, persisted as settings.json.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Connection string for the reading store. `sslrootcert` may be passed
    /// as a URL query parameter for hosted instances.
    pub database_url: String,
    /// Seconds between refresh passes
    pub poll_interval_secs: u64,
    /// Reading window scanned for the alert feed
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Readings per trend series
    #[serde(default = "default_trend_points")]
    pub trend_points: usize,
}

fn default_history_limit() -> usize {
    50
}

fn default_trend_points() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        // DATABASE_URL from the environment seeds the default; .env is a
        // convenience for local runs. The settings file can still override.
        dotenv::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").unwrap_or_default();

        Self {
            database_url,
            poll_interval_secs: 2,
            history_limit: default_history_limit(),
            trend_points: default_trend_points(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        let default = manager.load();
        assert_eq!(default.poll_interval_secs, 2);
        assert_eq!(default.history_limit, 50);

        let new_settings = Settings {
            database_url: "postgres://reader@db.example/health".to_string(),
            poll_interval_secs: 5,
            history_limit: 100,
            trend_points: 30,
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(
            loaded.database_url,
            "postgres://reader@db.example/health"
        );
        assert_eq!(loaded.poll_interval_secs, 5);
        assert_eq!(loaded.history_limit, 100);
        assert_eq!(loaded.trend_points, 30);
    }

    #[test]
    fn test_missing_window_fields_fall_back() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        // Settings written by an older build, before the window knobs existed
        fs::write(
            dir.path().join("settings.json"),
            r#"{"database_url": "postgres://x", "poll_interval_secs": 3}"#,
        )
        .unwrap();

        let loaded = manager.load();
        assert_eq!(loaded.poll_interval_secs, 3);
        assert_eq!(loaded.history_limit, 50);
        assert_eq!(loaded.trend_points, 20);
    }
}
