// Normal-band table and status classification for sensor values.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::model::{SensorKind, Status};

/// Closed interval defining the normal band for a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
}

/// Fraction of the band width, on each side, treated as near-boundary.
const WARNING_MARGIN: f64 = 0.10;

lazy_static! {
    /// Normal bands for the channels that have one. ECG and GSR are raw
    /// signal values with no banded interpretation and never appear here.
    static ref RANGES: HashMap<SensorKind, RangeSpec> = {
        let mut ranges = HashMap::new();
        ranges.insert(SensorKind::HeartRate, RangeSpec { min: 60.0, max: 100.0 });
        ranges.insert(SensorKind::Spo2, RangeSpec { min: 95.0, max: 100.0 });
        ranges.insert(SensorKind::BodyTemp, RangeSpec { min: 36.1, max: 37.2 });
        ranges.insert(SensorKind::RoomTemp, RangeSpec { min: 18.0, max: 30.0 });
        ranges.insert(SensorKind::Humidity, RangeSpec { min: 30.0, max: 70.0 });
        ranges
    };
}

/// The normal band for a channel, if one is defined.
pub fn range_for(kind: SensorKind) -> Option<RangeSpec> {
    RANGES.get(&kind).copied()
}

/// Classify a reported value against its channel's normal band.
/// Channels without a band always classify as Normal.
pub fn classify(kind: SensorKind, value: f64) -> Status {
    match range_for(kind) {
        Some(spec) => classify_against(&spec, value),
        None => Status::Normal,
    }
}

fn classify_against(spec: &RangeSpec, value: f64) -> Status {
    if value < spec.min || value > spec.max {
        return Status::Critical;
    }
    // Inner 10% of each side of the band is the near-boundary warning zone.
    // Comparisons are strict: a value exactly at min + margin reads Normal.
    let margin = (spec.max - spec.min) * WARNING_MARGIN;
    if value < spec.min + margin || value > spec.max - margin {
        return Status::Warning;
    }
    Status::Normal
}
