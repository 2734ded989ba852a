// Domain types shared across the dashboard core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sensor channels reported by the wearable and the room node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorKind {
    HeartRate,
    Spo2,
    BodyTemp,
    RoomTemp,
    Humidity,
    Ecg,
    Gsr,
}

impl SensorKind {
    /// Get the display name for this channel
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HeartRate => "Heart Rate",
            Self::Spo2 => "Blood Oxygen",
            Self::BodyTemp => "Body Temp",
            Self::RoomTemp => "Room Temp",
            Self::Humidity => "Humidity",
            Self::Ecg => "ECG Value",
            Self::Gsr => "GSR Value",
        }
    }

    /// Glyph shown next to the channel on dashboard cards
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::HeartRate => "❤️",
            Self::Spo2 => "🩸",
            Self::BodyTemp => "🌡️",
            Self::RoomTemp => "🏠",
            Self::Humidity => "💧",
            Self::Ecg => "📊",
            Self::Gsr => "⚡",
        }
    }

    /// All channels, in dashboard card order
    pub fn all() -> &'static [SensorKind] {
        &[
            Self::HeartRate,
            Self::Spo2,
            Self::BodyTemp,
            Self::RoomTemp,
            Self::Humidity,
            Self::Ecg,
            Self::Gsr,
        ]
    }
}

/// Severity classification of a single field value.
/// Ordered by severity: Normal < Warning < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
    Critical,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Severity color cue for the presentation layer
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Normal => "#4CAF50",
            Self::Warning => "#FF9800",
            Self::Critical => "#F44336",
        }
    }
}

/// One timestamped multi-field sample from the sensor network.
/// Immutable once received; the core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Store-assigned identifier, used to derive per-field alert ids
    pub id: i64,
    pub recorded_at: DateTime<Utc>,
    pub heart_rate: Option<f64>,
    pub spo2: Option<f64>,
    pub body_temp: Option<f64>,
    pub room_temp: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    pub gsr_value: Option<f64>,
}

impl Reading {
    /// Value of the given channel, if this sample reported it.
    /// None means "not reported", which is distinct from zero.
    pub fn value(&self, kind: SensorKind) -> Option<f64> {
        match kind {
            SensorKind::HeartRate => self.heart_rate,
            SensorKind::Spo2 => self.spo2,
            SensorKind::BodyTemp => self.body_temp,
            SensorKind::RoomTemp => self.room_temp,
            SensorKind::Humidity => self.humidity,
            SensorKind::Ecg => self.ecg_value,
            SensorKind::Gsr => self.gsr_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_names_and_glyphs() {
        for kind in SensorKind::all() {
            assert!(!kind.display_name().is_empty());
            assert!(!kind.glyph().is_empty());
        }
    }

    #[test]
    fn test_status_severity_order() {
        assert!(Status::Normal < Status::Warning);
        assert!(Status::Warning < Status::Critical);
    }

    #[test]
    fn test_reading_value_lookup() {
        let reading = Reading {
            id: 1,
            recorded_at: Utc::now(),
            heart_rate: Some(72.0),
            spo2: None,
            body_temp: Some(36.6),
            room_temp: None,
            humidity: None,
            ecg_value: None,
            gsr_value: Some(0.0),
        };

        assert_eq!(reading.value(SensorKind::HeartRate), Some(72.0));
        assert_eq!(reading.value(SensorKind::Spo2), None);
        // Zero is a reported value, not absence
        assert_eq!(reading.value(SensorKind::Gsr), Some(0.0));
    }
}
