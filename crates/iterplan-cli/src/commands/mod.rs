pub mod config;
pub mod estimate;
pub mod report;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use iterplan_core::burndown::parse_timestamp;
use iterplan_core::{Config, ConfigError};
use serde::Serialize;

/// Resolve the config file: explicit path or the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::path(),
    }
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Like [`load_config`], but an unreadable config falls back to defaults.
pub fn load_config_or_default(explicit: Option<&Path>) -> Config {
    match explicit {
        Some(path) => Config::load_from_or_default(path),
        None => Config::load_or_default(),
    }
}

/// `--now` if given, otherwise the wall clock.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match now {
        Some(raw) => Ok(parse_timestamp("now", raw)?),
        None => Ok(Utc::now()),
    }
}

pub fn print_json<T: Serialize>(value: &T, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
