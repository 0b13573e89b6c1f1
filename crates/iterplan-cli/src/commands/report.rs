use std::path::{Path, PathBuf};

use clap::Args;
use iterplan_core::IterationSnapshot;

use super::{load_config_or_default, print_json, resolve_now};

#[derive(Args)]
pub struct ReportArgs {
    /// JSON file with {"iteration": {...}, "tasks": [...]}
    #[arg(long)]
    pub file: PathBuf,
    /// Evaluate at this ISO-8601 time instead of now
    #[arg(long)]
    pub now: Option<String>,
}

fn read_snapshot(path: &Path) -> Result<IterationSnapshot, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn run_report(args: ReportArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default(config_path);
    let snapshot = read_snapshot(&args.file)?;
    let now = resolve_now(args.now.as_deref())?;

    let report = snapshot
        .iteration
        .progress(&config.calculator(), &snapshot.tasks, now);
    print_json(&report, &config)
}

pub fn run_chart(args: ReportArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default(config_path);
    let snapshot = read_snapshot(&args.file)?;
    let now = resolve_now(args.now.as_deref())?;

    let series = snapshot.iteration.chart(&snapshot.tasks, now)?;
    print_json(&series, &config)
}
