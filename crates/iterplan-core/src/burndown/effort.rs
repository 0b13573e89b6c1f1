//! Effort aggregation and effort-completed progress.

use crate::estimate::{lookup, CaseEstimate};
use crate::task::{Task, TaskStatus};

/// Share of an in-progress task's estimate counted as done.
pub const IN_PROGRESS_WEIGHT: f64 = 0.5;

fn sum_where(tasks: &[Task], keep: impl Fn(&Task) -> bool) -> CaseEstimate<f64> {
    tasks
        .iter()
        .filter(|&task| keep(task))
        .map(|task| lookup(task.estimate))
        .sum()
}

/// Estimated days across every task, regardless of status.
pub fn total_effort(tasks: &[Task]) -> CaseEstimate<f64> {
    sum_where(tasks, |_| true)
}

/// Estimated days across tasks with the given status.
pub fn effort_with_status(tasks: &[Task], status: TaskStatus) -> CaseEstimate<f64> {
    sum_where(tasks, |task| task.status == status)
}

pub fn completed_effort(tasks: &[Task]) -> CaseEstimate<f64> {
    effort_with_status(tasks, TaskStatus::Completed)
}

pub fn in_progress_effort(tasks: &[Task]) -> CaseEstimate<f64> {
    effort_with_status(tasks, TaskStatus::InProgress)
}

/// Completed effort plus the weighted share of in-progress effort.
pub fn burned_effort(completed: CaseEstimate<f64>, in_progress: CaseEstimate<f64>) -> CaseEstimate<f64> {
    completed.zip_with(in_progress, |done, partial| done + partial * IN_PROGRESS_WEIGHT)
}

/// Percentage (0-100) of estimated effort burned, per scenario.
///
/// A task set with no estimated effort is vacuously complete.
pub fn effort_progress(tasks: &[Task]) -> CaseEstimate<u8> {
    progress_from_totals(total_effort(tasks), completed_effort(tasks), in_progress_effort(tasks))
}

pub(crate) fn progress_from_totals(
    total: CaseEstimate<f64>,
    completed: CaseEstimate<f64>,
    in_progress: CaseEstimate<f64>,
) -> CaseEstimate<u8> {
    if total.is_zero() {
        return CaseEstimate::splat(100);
    }

    burned_effort(completed, in_progress).zip_with(total, |burned, total| {
        if total <= 0.0 {
            100
        } else {
            (burned / total * 100.0).round().clamp(0.0, 100.0) as u8
        }
    })
}
