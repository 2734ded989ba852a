// Alert model types for the abnormal-vitals feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::model::{Reading, SensorKind, Status};

/// The vital-sign fields surfaced in the alert feed.
///
/// Room temperature and humidity are classified for the dashboard cards but
/// deliberately kept out of the feed; ECG and GSR carry no band at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalField {
    HeartRate,
    Spo2,
    BodyTemp,
}

impl VitalField {
    /// All alerting fields, in evaluation order within one reading
    pub fn all() -> &'static [VitalField] {
        &[Self::HeartRate, Self::Spo2, Self::BodyTemp]
    }

    /// Short tag appended to the reading id to form the alert id
    pub fn tag(&self) -> &'static str {
        match self {
            Self::HeartRate => "hr",
            Self::Spo2 => "spo2",
            Self::BodyTemp => "temp",
        }
    }

    /// The sensor channel this field maps to
    pub fn sensor_kind(&self) -> SensorKind {
        match self {
            Self::HeartRate => SensorKind::HeartRate,
            Self::Spo2 => SensorKind::Spo2,
            Self::BodyTemp => SensorKind::BodyTemp,
        }
    }

    /// The field's value on a reading, if the sample reported it
    pub fn value_of(&self, reading: &Reading) -> Option<f64> {
        reading.value(self.sensor_kind())
    }
}

/// One abnormal field on one reading.
///
/// Records are recomputed fresh on every scan and never persisted; the id is
/// stable for the same reading+field pair so display lists can key on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    /// `<reading id>-<field tag>`, e.g. "42-hr"
    pub id: String,
    pub kind: SensorKind,
    pub value: f64,
    /// Warning or Critical; Normal fields never produce a record
    pub status: Status,
    /// Copied from the source reading
    pub timestamp: DateTime<Utc>,
}
