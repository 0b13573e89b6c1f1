//! Composite burndown report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::effort::{completed_effort, in_progress_effort, progress_from_totals, total_effort};
use super::projection::expected_end_date;
use super::status::{classify, BurndownStatus, StatusThresholds};
use super::time::{parse_timestamp, time_progress};
use crate::error::ValidationError;
use crate::estimate::CaseEstimate;
use crate::task::Task;

/// Everything a dashboard needs to render an iteration's burndown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Percentage of the iteration window elapsed (0-100).
    pub time_progress: u8,
    /// Percentage of estimated effort burned per scenario (0-100).
    pub effort_progress: CaseEstimate<u8>,
    pub status: BurndownStatus,
    pub total_effort: CaseEstimate<f64>,
    pub completed_effort: CaseEstimate<f64>,
    pub in_progress_effort: CaseEstimate<f64>,
    /// Projected completion date per scenario.
    pub expected_end_date: CaseEstimate<DateTime<Utc>>,
}

/// Date-dependent part of a report.
struct Timeline {
    time_progress: u8,
    status: BurndownStatus,
    expected_end_date: CaseEstimate<DateTime<Utc>>,
}

/// Burndown calculator with configurable status thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurndownCalculator {
    thresholds: StatusThresholds,
}

impl BurndownCalculator {
    /// Create a calculator with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &StatusThresholds {
        &self.thresholds
    }

    /// Build a report for the iteration `[start_date, end_date]` at `now`.
    ///
    /// Without an end date, time progress is measured against the likely
    /// projected completion. An unparseable date never fails the call: the
    /// report falls back to 0% elapsed, on track, and projections equal to
    /// `now`, while effort figures are still computed.
    pub fn calculate(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        tasks: &[Task],
        now: DateTime<Utc>,
    ) -> ProgressReport {
        let total = total_effort(tasks);
        let completed = completed_effort(tasks);
        let in_progress = in_progress_effort(tasks);
        let effort_progress = progress_from_totals(total, completed, in_progress);

        let timeline = self
            .timeline(start_date, end_date, total, completed, in_progress, &effort_progress, now)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "burndown dates invalid, reporting default progress");
                Timeline {
                    time_progress: 0,
                    status: BurndownStatus::OnTrack,
                    expected_end_date: CaseEstimate::splat(now),
                }
            });

        tracing::debug!(
            tasks = tasks.len(),
            time_progress = timeline.time_progress,
            effort_likely = effort_progress.likely,
            status = %timeline.status,
            "computed burndown progress"
        );

        ProgressReport {
            time_progress: timeline.time_progress,
            effort_progress,
            status: timeline.status,
            total_effort: total,
            completed_effort: completed,
            in_progress_effort: in_progress,
            expected_end_date: timeline.expected_end_date,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn timeline(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        total: CaseEstimate<f64>,
        completed: CaseEstimate<f64>,
        in_progress: CaseEstimate<f64>,
        effort_progress: &CaseEstimate<u8>,
        now: DateTime<Utc>,
    ) -> Result<Timeline, ValidationError> {
        let start = parse_timestamp("start_date", start_date)?;
        let end = end_date.map(|end| parse_timestamp("end_date", end)).transpose()?;

        let expected_end_date = expected_end_date(start, total, completed, in_progress, now);
        let time_progress = time_progress(start, end.unwrap_or(expected_end_date.likely), now);
        let status = classify(
            time_progress,
            effort_progress,
            end,
            &expected_end_date,
            now,
            &self.thresholds,
        );

        Ok(Timeline {
            time_progress,
            status,
            expected_end_date,
        })
    }
}

/// Build a burndown report with the default thresholds.
pub fn calculate_burndown_progress(
    start_date: &str,
    end_date: Option<&str>,
    tasks: &[Task],
    now: DateTime<Utc>,
) -> ProgressReport {
    BurndownCalculator::new().calculate(start_date, end_date, tasks, now)
}
