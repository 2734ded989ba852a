/// Value and timestamp formatting for the presentation layer
use chrono::{DateTime, Local, Utc};

use super::alerts::model::AlertRecord;
use super::model::{SensorKind, Status};

/// Format a channel value with its unit suffix.
///
/// Temperatures render with one decimal and °C, humidity with one decimal
/// and %, spo2 as a bare percentage, heart rate in BPM. ECG/GSR are raw
/// signal values and render as plain numbers. Absent values render as "N/A".
pub fn format_value(kind: SensorKind, value: Option<f64>) -> String {
    let value = match value {
        Some(value) => value,
        None => return "N/A".to_string(),
    };

    match kind {
        SensorKind::BodyTemp | SensorKind::RoomTemp => format!("{:.1}°C", value),
        SensorKind::Humidity => format!("{:.1}%", value),
        SensorKind::HeartRate => format!("{} BPM", value),
        SensorKind::Spo2 => format!("{}%", value),
        SensorKind::Ecg | SensorKind::Gsr => value.to_string(),
    }
}

/// Wall-clock time of a sample, for feed rows and the header.
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Compact "how long ago" label for the last-updated badge.
pub fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let diff = (now - then).num_seconds().max(0);
    if diff < 60 {
        format!("{}s ago", diff)
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else {
        format!("{}h ago", diff / 3600)
    }
}

/// One-line feed message, e.g. "CRITICAL: Heart Rate is 40 BPM".
pub fn alert_message(alert: &AlertRecord) -> String {
    let severity = if alert.status == Status::Critical {
        "CRITICAL"
    } else {
        "WARNING"
    };
    format!(
        "{}: {} is {}",
        severity,
        alert.kind.display_name(),
        format_value(alert.kind, Some(alert.value))
    )
}
