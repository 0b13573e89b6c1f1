use std::path::Path;

use iterplan_core::estimation::{consensus, consensus_size};
use iterplan_core::{CaseEstimate, TShirtSize};
use serde::Serialize;

use super::{load_config_or_default, print_json};

#[derive(Serialize)]
struct ConsensusOutput {
    votes: usize,
    average: CaseEstimate<f64>,
    size: TShirtSize,
}

pub fn run_sizes() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<5} {:>5} {:>7} {:>6}", "SIZE", "BEST", "LIKELY", "WORST");
    for size in TShirtSize::ALL {
        let days = size.estimate_days();
        println!(
            "{:<5} {:>5} {:>7} {:>6}",
            size.label(),
            days.best,
            days.likely,
            days.worst
        );
    }
    Ok(())
}

pub fn run_consensus(file: &Path, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_or_default(config_path);
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let votes: Vec<CaseEstimate<f64>> = serde_json::from_str(&content)?;

    let average = consensus(&votes).ok_or("no estimates to average")?;
    let output = ConsensusOutput {
        votes: votes.len(),
        average,
        size: consensus_size(&average),
    };
    print_json(&output, &config)
}
