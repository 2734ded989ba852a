// Alert derivation - scans a reading window for abnormal vital signs.

use super::model::{AlertRecord, VitalField};
use crate::core::model::{Reading, Status};
use crate::core::ranges::classify;

/// Scan a window of readings and emit one record per abnormal vital field.
///
/// Readings are visited in the order given (the store serves them
/// most-recent-first and this function does not re-sort), and fields within
/// one reading in the fixed order heart rate, spo2, body temp. Absent fields
/// are skipped. The whole feed is recomputed from scratch on every scan;
/// nothing is carried between invocations, so an empty window is simply an
/// empty (all-clear) feed.
pub fn derive_alerts(readings: &[Reading]) -> Vec<AlertRecord> {
    let mut alerts = Vec::new();

    for reading in readings {
        for field in VitalField::all() {
            let value = match field.value_of(reading) {
                Some(value) => value,
                None => continue,
            };

            let status = classify(field.sensor_kind(), value);
            if status == Status::Normal {
                continue;
            }

            alerts.push(AlertRecord {
                id: format!("{}-{}", reading.id, field.tag()),
                kind: field.sensor_kind(),
                value,
                status,
                timestamp: reading.recorded_at,
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SensorKind;
    use chrono::{TimeZone, Utc};

    fn make_reading(id: i64, secs: i64) -> Reading {
        Reading {
            id,
            recorded_at: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
            heart_rate: None,
            spo2: None,
            body_temp: None,
            room_temp: None,
            humidity: None,
            ecg_value: None,
            gsr_value: None,
        }
    }

    #[test]
    fn test_empty_window_is_all_clear() {
        assert!(derive_alerts(&[]).is_empty());
    }

    #[test]
    fn test_critical_heart_rate_fires_once() {
        let mut reading = make_reading(7, 0);
        reading.heart_rate = Some(40.0);

        let alerts = derive_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "7-hr");
        assert_eq!(alerts[0].kind, SensorKind::HeartRate);
        assert_eq!(alerts[0].status, Status::Critical);
        assert_eq!(alerts[0].value, 40.0);
    }

    #[test]
    fn test_near_boundary_spo2_warns() {
        let mut reading = make_reading(3, 0);
        reading.spo2 = Some(95.3);

        let alerts = derive_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "3-spo2");
        assert_eq!(alerts[0].status, Status::Warning);
    }

    #[test]
    fn test_normal_vitals_produce_nothing() {
        let mut reading = make_reading(1, 0);
        reading.heart_rate = Some(75.0);
        reading.spo2 = Some(98.0);
        reading.body_temp = Some(36.65);

        assert!(derive_alerts(&[reading]).is_empty());
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        // All vitals missing, only ambient channels present (and abnormal)
        let mut reading = make_reading(9, 0);
        reading.room_temp = Some(45.0);
        reading.humidity = Some(5.0);

        assert!(derive_alerts(&[reading]).is_empty());
    }

    #[test]
    fn test_ambient_channels_never_alert() {
        // Severely out-of-range room temp and humidity next to one bad vital:
        // only the vital surfaces
        let mut reading = make_reading(4, 0);
        reading.heart_rate = Some(150.0);
        reading.room_temp = Some(60.0);
        reading.humidity = Some(99.0);

        let alerts = derive_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, SensorKind::HeartRate);
    }

    #[test]
    fn test_feed_follows_reading_order() {
        let mut first = make_reading(1, 20);
        first.heart_rate = Some(40.0);
        let mut second = make_reading(2, 10);
        second.spo2 = Some(90.0);
        let mut third = make_reading(3, 0);
        third.body_temp = Some(39.0);

        let alerts = derive_alerts(&[first, second, third]);
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1-hr", "2-spo2", "3-temp"]);
    }

    #[test]
    fn test_field_order_within_one_reading() {
        let mut reading = make_reading(5, 0);
        reading.heart_rate = Some(200.0);
        reading.spo2 = Some(80.0);
        reading.body_temp = Some(40.0);

        let alerts = derive_alerts(&[reading]);
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["5-hr", "5-spo2", "5-temp"]);
    }

    #[test]
    fn test_zero_vital_is_a_value_not_absence() {
        let mut reading = make_reading(6, 0);
        reading.heart_rate = Some(0.0);

        let alerts = derive_alerts(&[reading]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].status, Status::Critical);
    }
}
