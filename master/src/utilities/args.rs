use std::path::PathBuf;

use log::warn;

use elevator_core::{Floor, FleetConfig, StrategyKind};

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Command line overrides, applied on top of the configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    pub config_path: Option<PathBuf>,
    pub num_cars: Option<usize>,
    pub min_floor: Option<Floor>,
    pub max_floor: Option<Floor>,
    pub tick_ms: Option<u64>,
    pub strategy: Option<StrategyKind>,
}

impl Args {
    /// Parses `--flag value` pairs. Values that do not parse and unknown flags
    /// are reported and skipped.
    pub fn parse(args: &[String]) -> Self {
        let mut parsed = Args::default();
        for arg_pair in args.chunks_exact(2) {
            let (flag, value) = (arg_pair[0].as_str(), arg_pair[1].as_str());
            match flag {
                "--config" => parsed.config_path = Some(PathBuf::from(value)),
                "--cars" => parsed.num_cars = parse_value(flag, value).or(parsed.num_cars),
                "--min-floor" => parsed.min_floor = parse_value(flag, value).or(parsed.min_floor),
                "--max-floor" => parsed.max_floor = parse_value(flag, value).or(parsed.max_floor),
                "--tick-ms" => parsed.tick_ms = parse_value(flag, value).or(parsed.tick_ms),
                "--strategy" => parsed.strategy = parse_value(flag, value).or(parsed.strategy),
                _ => warn!("illegal argument {}, skipping...", flag),
            }
        }
        if args.len() % 2 == 1 {
            warn!("argument {} has no value, skipping...", args[args.len() - 1]);
        }
        parsed
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn apply(&self, config: &mut FleetConfig) {
        if let Some(num_cars) = self.num_cars {
            config.num_cars = num_cars;
        }
        if let Some(min_floor) = self.min_floor {
            config.min_floor = min_floor;
        }
        if let Some(max_floor) = self.max_floor {
            config.max_floor = max_floor;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
    }
}

fn parse_value<T>(flag: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    match value.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} {} is not valid, skipping...", flag, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn overrides_replace_file_settings() {
        let args = Args::parse(&strings(&["--cars", "4", "--max-floor", "20", "--strategy", "nearest"]));
        let mut config = FleetConfig::default();
        args.apply(&mut config);
        assert_eq!(config.num_cars, 4);
        assert_eq!(config.max_floor, 20);
        assert_eq!(config.min_floor, 0);
        assert_eq!(config.strategy, StrategyKind::Nearest);
    }

    #[test]
    fn bad_values_are_skipped() {
        let args = Args::parse(&strings(&["--cars", "many", "--tick-ms", "100", "--color", "red", "--min-floor"]));
        assert_eq!(args.num_cars, None);
        assert_eq!(args.tick_ms, Some(100));
        assert_eq!(args.min_floor, None);
    }

    #[test]
    fn config_path_defaults() {
        assert_eq!(Args::parse(&[]).config_path(), PathBuf::from("config.json"));
        let args = Args::parse(&strings(&["--config", "fleet.json"]));
        assert_eq!(args.config_path(), PathBuf::from("fleet.json"));
    }
}
