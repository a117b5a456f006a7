use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One satellite picked in the dashboard form. Lives only for the duration of
/// a single fetch cycle.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct Selection {
    /// NORAD catalog number.
    pub id: u32,
    /// Display color tag, passed through to the response untouched.
    pub color: String,
}

/// Observer location sent with every upstream request.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            altitude_m: 0.0,
        }
    }
}

impl Observer {
    /// Parses a "lat, lon" coordinate string.
    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        Some(Self {
            latitude_deg: lat,
            longitude_deg: lon,
            altitude_m: altitude_m.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SatelliteInfo {
    pub satid: u32,
    pub satname: String,
}

/// One position snapshot from the provider. Not a time series; with the short
/// request window the relay uses, `positions` usually holds a single sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PositionSample {
    /// Right ascension, degrees.
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Elevation above the observer horizon, degrees.
    pub elevation: f64,
    pub azimuth: f64,
    pub satlatitude: f64,
    pub satlongitude: f64,
    /// Satellite altitude above the surface, km.
    pub sataltitude: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub timestamp: DateTime<Utc>,
}

/// Typed subset of the provider's positions response. Fields the
/// visualization never reads are dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PositionReport {
    pub info: SatelliteInfo,
    #[serde(default)]
    pub positions: Vec<PositionSample>,
}

impl PositionReport {
    pub fn latest(&self) -> Option<&PositionSample> {
        self.positions.first()
    }
}

/// Relay output item: one upstream report paired with the caller's color tag.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TaggedReport {
    pub data: PositionReport,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed real response shape from the provider.
    const REPORT: &str = r#"{
        "info": { "satid": 25544, "satname": "SPACE STATION", "transactionscount": 4 },
        "positions": [
            {
                "satlatitude": 42.21452057, "satlongitude": -105.54511078,
                "sataltitude": 420.1, "azimuth": 24.3, "elevation": 12.73,
                "ra": 291.62, "dec": 41.96, "timestamp": 1733766112, "eclipsed": false
            },
            {
                "satlatitude": 42.26, "satlongitude": -105.49,
                "sataltitude": 420.11, "azimuth": 24.1, "elevation": 12.8,
                "ra": 291.7, "dec": 42.0, "timestamp": 1733766113, "eclipsed": false
            }
        ]
    }"#;

    #[test]
    fn deserializes_provider_report() {
        let report: PositionReport = serde_json::from_str(REPORT).unwrap();
        assert_eq!(report.info.satid, 25544);
        assert_eq!(report.positions.len(), 2);
        let first = report.latest().unwrap();
        assert_eq!(first.ra, 291.62);
        assert_eq!(first.dec, 41.96);
        assert_eq!(first.elevation, 12.73);
        assert_eq!(first.timestamp.timestamp(), 1733766112);
    }

    #[test]
    fn missing_positions_defaults_to_empty() {
        let report: PositionReport = serde_json::from_str(
            r#"{ "info": { "satid": 20580, "satname": "HST" } }"#,
        )
        .unwrap();
        assert!(report.latest().is_none());
    }

    #[test]
    fn observer_from_coordinates() {
        let obs = Observer::from_coordinates("45.6793, -111.0373", Some(1460.0)).unwrap();
        assert_eq!(obs.latitude_deg, 45.6793);
        assert_eq!(obs.longitude_deg, -111.0373);
        assert_eq!(obs.altitude_m, 1460.0);
        assert!(Observer::from_coordinates("45.6793", None).is_none());
        assert!(Observer::from_coordinates("north, west", None).is_none());
    }

    #[test]
    fn timestamp_round_trips_as_unix_seconds() {
        let report: PositionReport = serde_json::from_str(REPORT).unwrap();
        let json = serde_json::to_value(&report.positions[0]).unwrap();
        assert_eq!(json["timestamp"], 1733766112);
    }
}
