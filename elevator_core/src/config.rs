use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::info;

use crate::bounds::{Floor, FloorBounds};
use crate::dispatch::StrategyKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fleet layout and timing, read once by the host before the fleet is built.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FleetConfig {
    pub num_cars: usize,
    pub min_floor: Floor,
    pub max_floor: Floor,
    pub start_floor: Floor,
    pub tick_ms: u64,
    pub strategy: StrategyKind,
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig {
            num_cars: 2,
            min_floor: 0,
            max_floor: 10,
            start_floor: 0,
            tick_ms: 500,
            strategy: StrategyKind::DirectionAware,
        }
    }
}

impl FleetConfig {
    /// Reads the JSON file at `path`. A missing file means default settings;
    /// anything else that goes wrong is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no configuration file provided at {}, using default settings", path.display());
                return Ok(FleetConfig::default());
            }
            Err(e) => return Err(e.into()),
        };
        FleetConfig::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: FleetConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_cars == 0 {
            return Err(ConfigError::Invalid(String::from("the fleet needs at least one car")));
        }
        if self.min_floor > self.max_floor {
            return Err(ConfigError::Invalid(format!(
                "min_floor {} is above max_floor {}",
                self.min_floor, self.max_floor
            )));
        }
        if !self.bounds().contains(self.start_floor) {
            return Err(ConfigError::Invalid(format!(
                "start_floor {} is outside floors {} to {}",
                self.start_floor, self.min_floor, self.max_floor
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid(String::from("tick_ms must be positive")));
        }
        Ok(())
    }

    pub fn bounds(&self) -> FloorBounds {
        FloorBounds::new(self.min_floor, self.max_floor)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = FleetConfig::from_json(r#"{ "num_cars": 4, "strategy": "nearest" }"#).unwrap();
        assert_eq!(config.num_cars, 4);
        assert_eq!(config.strategy, StrategyKind::Nearest);
        assert_eq!(config.bounds(), FloorBounds::new(0, 10));
        assert_eq!(config.tick(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_inconsistent_layouts() {
        for json in [
            r#"{ "num_cars": 0 }"#,
            r#"{ "min_floor": 5, "max_floor": 2, "start_floor": 3 }"#,
            r#"{ "start_floor": 11 }"#,
            r#"{ "tick_ms": 0 }"#,
        ] {
            assert!(matches!(FleetConfig::from_json(json), Err(ConfigError::Invalid(_))), "{}", json);
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(FleetConfig::from_json("{ num_cars: 2"), Err(ConfigError::Parse(_))));
        assert!(matches!(FleetConfig::from_json(r#"{ "strategy": "random" }"#), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = FleetConfig::load("this/file/does/not/exist.json").unwrap();
        assert_eq!(config, FleetConfig::default());
    }
}
