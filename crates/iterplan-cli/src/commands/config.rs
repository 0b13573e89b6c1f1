use std::path::Path;

use clap::Subcommand;
use iterplan_core::Config;

use super::{config_path, load_config};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "thresholds.ahead", "output.pretty")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Show all config values
    Show,
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction, explicit: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(explicit)?;
            let value = config.get(&key).ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let path = config_path(explicit)?;
            let mut config = Config::load_from(&path)?;
            config.set(&key, &value)?;
            config.save_to(&path)?;
            tracing::info!(%key, %value, path = %path.display(), "config updated");
            println!("ok");
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", config_path(explicit)?.display());
        }
        ConfigAction::Reset => {
            match explicit {
                Some(path) => Config::default().save_to(path)?,
                None => Config::default().save()?,
            }
            println!("config reset to defaults");
        }
    }
    Ok(())
}
