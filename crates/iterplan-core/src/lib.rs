//! # Iterplan Core Library
//!
//! Core logic for Iterplan, a team iteration-planning tool. Iterations hold
//! tasks sized by t-shirt estimate; this library turns an iteration and its
//! tasks into burndown progress the dashboard can render.
//!
//! ## Architecture
//!
//! - **Estimates**: fixed best/likely/worst day counts per t-shirt size
//! - **Burndown**: pure projection engine (effort totals, time and effort
//!   progress, velocity-based completion dates, health status, chart series)
//! - **Estimation sessions**: in-memory rules for team estimation rounds
//! - **Config**: TOML-based thresholds and output settings
//!
//! ## Key Components
//!
//! - [`calculate_burndown_progress`]: composite burndown entry point
//! - [`BurndownCalculator`]: the same with configurable thresholds
//! - [`EstimationSession`]: team estimation round state
//! - [`Config`]: application configuration management

pub mod burndown;
pub mod config;
pub mod error;
pub mod estimate;
pub mod estimation;
pub mod iteration;
pub mod task;

pub use burndown::{
    burndown_series, calculate_burndown_progress, BurndownCalculator, BurndownSeries, BurndownStatus,
    ProgressReport, StatusThresholds,
};
pub use config::Config;
pub use error::{ConfigError, CoreError, EstimationError, ValidationError};
pub use estimate::{CaseEstimate, TShirtSize};
pub use estimation::{EstimationSession, RoundStatus, Vote};
pub use iteration::{Iteration, IterationSnapshot};
pub use task::{Priority, Task, TaskStatus};
