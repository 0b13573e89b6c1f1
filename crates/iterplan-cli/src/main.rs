use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "iterplan-cli", version, about = "Iterplan CLI")]
struct Cli {
    /// Config file (defaults to ~/.config/iterplan/config.toml)
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burndown progress report for an iteration
    Report(commands::report::ReportArgs),
    /// Day-by-day burndown chart series for an iteration
    Chart(commands::report::ReportArgs),
    /// Show the t-shirt size estimate table
    Sizes,
    /// Average a set of three-point estimates
    Consensus {
        /// JSON file with an array of {best, likely, worst} estimates
        #[arg(long)]
        file: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ITERPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let config_path = cli.config_file;
    let result = match cli.command {
        Commands::Report(args) => commands::report::run_report(args, config_path.as_deref()),
        Commands::Chart(args) => commands::report::run_chart(args, config_path.as_deref()),
        Commands::Sizes => commands::estimate::run_sizes(),
        Commands::Consensus { file } => commands::estimate::run_consensus(&file, config_path.as_deref()),
        Commands::Config { action } => commands::config::run(action, config_path.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
