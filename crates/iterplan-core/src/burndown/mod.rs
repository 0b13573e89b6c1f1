//! Burndown projection engine.
//!
//! Converts an iteration window and its tasks into a [`ProgressReport`]:
//!
//! - effort totals per scenario (best/likely/worst) from t-shirt estimates,
//! - time elapsed and effort burned as percentages,
//! - a velocity-based completion date per scenario,
//! - a health [`BurndownStatus`].
//!
//! Every function here is pure. The current time is always passed in as
//! `now`; only the outermost caller reads the wall clock.

mod chart;
mod effort;
mod projection;
mod report;
mod status;
mod time;

pub use chart::{burndown_series, BurndownSeries, ChartPoint};
pub use effort::{
    burned_effort, completed_effort, effort_progress, effort_with_status, in_progress_effort,
    total_effort, IN_PROGRESS_WEIGHT,
};
pub use projection::expected_end_date;
pub use report::{calculate_burndown_progress, BurndownCalculator, ProgressReport};
pub use status::{
    classify, BurndownStatus, StatusThresholds, AHEAD_THRESHOLD, AT_RISK_THRESHOLD,
    ON_TRACK_THRESHOLD,
};
pub use time::{days_between, parse_timestamp, time_progress};
