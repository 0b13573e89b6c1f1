//! Iterations (sprints) and their task snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::burndown::{burndown_series, BurndownCalculator, BurndownSeries, ProgressReport};
use crate::error::ValidationError;
use crate::task::Task;

/// A fixed work period. `end_date` is absent for open-ended iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iteration {
    #[serde(default)]
    pub name: String,
    /// ISO-8601 start timestamp.
    pub start_date: String,
    /// ISO-8601 planned end timestamp.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Iteration {
    pub fn new(name: impl Into<String>, start_date: impl Into<String>, end_date: Option<String>) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date,
            description: String::new(),
        }
    }

    pub fn progress(&self, calculator: &BurndownCalculator, tasks: &[Task], now: DateTime<Utc>) -> ProgressReport {
        calculator.calculate(&self.start_date, self.end_date.as_deref(), tasks, now)
    }

    pub fn chart(&self, tasks: &[Task], now: DateTime<Utc>) -> Result<BurndownSeries, ValidationError> {
        burndown_series(&self.start_date, self.end_date.as_deref(), tasks, now)
    }
}

/// An iteration together with its tasks, as exchanged with the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationSnapshot {
    pub iteration: Iteration,
    #[serde(default)]
    pub tasks: Vec<Task>,
}
