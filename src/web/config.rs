use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::relay::Observer;
use crate::scene;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid station coordinates: {0}")]
    InvalidCoordinates(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: StationConfig,
    #[serde(default)]
    pub web: WebConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cities: Vec<CityConfig>,
}

/// Observer location; every upstream request is made from this point.
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub name: Option<String>,
    /// "lat, lon" in decimal degrees.
    pub coordinates: String,
    #[serde(default)]
    pub altitude_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Prediction window requested from the provider, seconds. Short on
    /// purpose; the relay only needs one snapshot per satellite.
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u32,
}

fn default_base_url() -> String {
    "https://api.n2yo.com/rest/v1/satellite".to_string()
}

fn default_window_seconds() -> u32 {
    2
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_orbit_samples")]
    pub orbit_samples: usize,
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
    #[serde(default = "default_altitude_scale")]
    pub altitude_scale: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit_samples: default_orbit_samples(),
            trail_length: default_trail_length(),
            altitude_scale: default_altitude_scale(),
        }
    }
}

fn default_orbit_samples() -> usize {
    scene::DEFAULT_ORBIT_SAMPLES
}

fn default_trail_length() -> usize {
    scene::DEFAULT_TRAIL_LENGTH
}

fn default_altitude_scale() -> f64 {
    scene::DEFAULT_ALTITUDE_SCALE
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        // The provider key usually lives in the environment, not the file.
        if let Ok(key) = std::env::var("N2YO_API_KEY") {
            if !key.is_empty() {
                config.upstream.api_key = key;
            }
        }
        Ok(config)
    }

    pub fn observer(&self) -> Result<Observer, ConfigError> {
        Observer::from_coordinates(&self.station.coordinates, Some(self.station.altitude_m))
            .ok_or_else(|| ConfigError::InvalidCoordinates(self.station.coordinates.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
station:
  name: Bozeman
  coordinates: "45.6793, -111.0373"
upstream:
  api_key: TESTKEY
catalog:
  path: catalog.yaml
"#;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = Config::from_str(MINIMAL).unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:3000");
        assert_eq!(config.upstream.base_url, "https://api.n2yo.com/rest/v1/satellite");
        assert_eq!(config.upstream.window_seconds, 2);
        assert_eq!(config.scene.orbit_samples, 500);
        assert_eq!(config.scene.trail_length, 250);
        assert_eq!(config.scene.altitude_scale, 0.5);
        assert!(config.cities.is_empty());
    }

    #[test]
    fn observer_uses_station_coordinates() {
        let config = Config::from_str(MINIMAL).unwrap();
        let observer = config.observer().unwrap();
        assert_eq!(observer.latitude_deg, 45.6793);
        assert_eq!(observer.longitude_deg, -111.0373);
    }

    #[test]
    fn bad_coordinates_are_an_error() {
        let mut config = Config::from_str(MINIMAL).unwrap();
        config.station.coordinates = "somewhere".to_string();
        assert!(matches!(
            config.observer(),
            Err(ConfigError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn scene_tuning_overrides() {
        let yaml = format!("{}\nscene:\n  orbit_samples: 120\n  trail_length: 30\n", MINIMAL);
        let config = Config::from_str(&yaml).unwrap();
        assert_eq!(config.scene.orbit_samples, 120);
        assert_eq!(config.scene.trail_length, 30);
        assert_eq!(config.scene.altitude_scale, 0.5);
    }
}
