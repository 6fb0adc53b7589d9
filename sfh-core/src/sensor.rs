use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A temperature/humidity reading from a greenhouse sensor.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of `GET /api/sensor/latest?gh_id=`.
///
/// When the greenhouse has never reported, the server answers
/// `{ "message": ... }` instead of a reading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorSnapshot {
    Absent { message: String },
    Reading(SensorReading),
}

impl SensorSnapshot {
    pub fn reading(&self) -> Option<&SensorReading> {
        match self {
            SensorSnapshot::Reading(r) => Some(r),
            SensorSnapshot::Absent { .. } => None,
        }
    }
}

/// Format a sensor timestamp as `YYYY.MM.DD HH:MM`.
///
/// The backend emits RFC 2822 (`Tue, 05 Nov 2024 13:02:11 GMT`) or ISO 8601;
/// anything else is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y.%m.%d %H:%M";
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}
