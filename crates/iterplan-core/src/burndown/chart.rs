//! Day-by-day burndown series for charting.
//!
//! The horizon is one calendar day per likely effort-day. Ideal lines burn
//! each scenario down over that horizon; the best case burns faster and the
//! worst case slower, scaled by the best/likely ratio. Actual lines replay
//! task completions up to the end of the current day.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::effort::total_effort;
use super::time::{days_between, parse_timestamp};
use crate::error::ValidationError;
use crate::estimate::{lookup, CaseEstimate};
use crate::task::Task;

/// One day on the burndown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Days since the iteration start.
    pub day: u32,
    pub date: DateTime<Utc>,
    /// Planned remaining effort.
    pub ideal: CaseEstimate<f64>,
    /// Recorded remaining effort; `None` for days that have not happened yet.
    pub actual: Option<CaseEstimate<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownSeries {
    pub total_effort: CaseEstimate<f64>,
    /// Day index of the planned end date, if the iteration has one.
    pub end_day: Option<i64>,
    pub points: Vec<ChartPoint>,
}

/// Build the chart series for an iteration at `now`.
pub fn burndown_series(
    start_date: &str,
    end_date: Option<&str>,
    tasks: &[Task],
    now: DateTime<Utc>,
) -> Result<BurndownSeries, ValidationError> {
    let start = parse_timestamp("start_date", start_date)?;
    let end = end_date.map(|end| parse_timestamp("end_date", end)).transpose()?;
    let total = total_effort(tasks);
    let completions = completions(tasks);
    let cutoff = end_of_day(now);

    let horizon = total.likely.max(0.0).ceil() as u32;
    // Days past the representable calendar are dropped.
    let points = (0..=horizon)
        .map_while(|day| {
            let date = start.checked_add_signed(Duration::days(i64::from(day)))?;
            let t = if horizon == 0 { 1.0 } else { f64::from(day) / f64::from(horizon) };
            Some(ChartPoint {
                day,
                date,
                ideal: ideal_remaining(total, t),
                actual: (date <= cutoff).then(|| actual_remaining(total, &completions, date)),
            })
        })
        .collect();

    Ok(BurndownSeries {
        total_effort: total,
        end_day: end.map(|end| days_between(start, end).floor() as i64),
        points,
    })
}

/// Planned remaining effort after fraction `t` of the horizon.
fn ideal_remaining(total: CaseEstimate<f64>, t: f64) -> CaseEstimate<f64> {
    let speedup = if total.likely > 0.0 { total.best / total.likely } else { 1.0 };
    let best_progress = if speedup > 0.0 { (t / speedup).min(1.0) } else { 1.0 };
    let worst_progress = (t * speedup).min(1.0);

    CaseEstimate {
        best: (total.best * (1.0 - best_progress)).max(0.0),
        likely: (total.likely * (1.0 - t)).max(0.0),
        worst: (total.worst * (1.0 - worst_progress)).max(0.0),
    }
}

fn actual_remaining(
    total: CaseEstimate<f64>,
    completions: &[(DateTime<Utc>, CaseEstimate<f64>)],
    at: DateTime<Utc>,
) -> CaseEstimate<f64> {
    let burned: CaseEstimate<f64> = completions
        .iter()
        .take_while(|(done_at, _)| *done_at <= at)
        .map(|(_, effort)| *effort)
        .sum();
    total.zip_with(burned, |total, burned| (total - burned).max(0.0))
}

/// Completed, estimated tasks ordered by completion time.
fn completions(tasks: &[Task]) -> Vec<(DateTime<Utc>, CaseEstimate<f64>)> {
    let mut done: Vec<_> = tasks
        .iter()
        .filter(|task| task.is_completed() && task.estimate.is_some())
        .filter_map(|task| {
            let raw = task.completed_at.as_deref()?;
            match parse_timestamp("completed_at", raw) {
                Ok(at) => Some((at, lookup(task.estimate))),
                Err(err) => {
                    tracing::debug!(task = %task.id, error = %err, "skipping completion");
                    None
                }
            }
        })
        .collect();
    done.sort_by_key(|(at, _)| *at);
    done
}

fn end_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map(|naive| naive.and_utc())
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::TShirtSize;
    use crate::task::TaskStatus;

    fn ts(s: &str) -> DateTime<Utc> {
        parse_timestamp("test", s).unwrap()
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("Login form", TaskStatus::Completed)
                .with_estimate(TShirtSize::Md)
                .with_completed_at("2024-01-11T15:00:00Z"),
            Task::new("Session API", TaskStatus::Completed)
                .with_estimate(TShirtSize::Sm)
                .with_completed_at("2024-01-13T09:00:00Z"),
            Task::new("Rate limiting", TaskStatus::InProgress).with_estimate(TShirtSize::Lg),
        ]
    }

    #[test]
    fn test_horizon_and_ideal_lines() {
        let series = burndown_series("2024-01-10", Some("2024-01-20"), &tasks(), ts("2024-01-14")).unwrap();
        // likely total: 3 + 2 + 5 = 10 days
        assert_eq!(series.total_effort, CaseEstimate::new(6.0, 10.0, 16.0));
        assert_eq!(series.points.len(), 11);
        assert_eq!(series.end_day, Some(10));

        let first = &series.points[0];
        assert_eq!(first.ideal, series.total_effort);
        assert_eq!(first.date, ts("2024-01-10"));

        let last = series.points.last().unwrap();
        assert_eq!(last.ideal.likely, 0.0);
        assert_eq!(last.ideal.best, 0.0);
        // worst case burns at 0.6 of the likely pace
        assert!((last.ideal.worst - 16.0 * 0.4).abs() < 1e-9);

        let mid = &series.points[5];
        assert_eq!(mid.ideal.likely, 5.0);
        assert!(mid.ideal.best < mid.ideal.likely * 0.6 + 1e-9);
    }

    #[test]
    fn test_actual_replays_completions() {
        let series = burndown_series("2024-01-10", None, &tasks(), ts("2024-01-14T08:00:00Z")).unwrap();
        let actual: Vec<_> = series.points.iter().map(|p| p.actual.map(|a| a.likely)).collect();

        assert_eq!(actual[0], Some(10.0));
        assert_eq!(actual[1], Some(10.0)); // MD completes later on day 1
        assert_eq!(actual[2], Some(7.0));
        assert_eq!(actual[3], Some(7.0)); // SM completes later on day 3
        assert_eq!(actual[4], Some(5.0));
        assert_eq!(actual[5], None);
        assert_eq!(series.end_day, None);
    }

    #[test]
    fn test_skips_bad_completion_timestamps() {
        let mut tasks = tasks();
        tasks[0].completed_at = Some("yesterday".into());
        tasks[1].completed_at = None;
        let series = burndown_series("2024-01-10", None, &tasks, ts("2024-01-20")).unwrap();
        assert!(series
            .points
            .iter()
            .all(|p| p.actual.map(|a| a.likely) == Some(10.0)));
    }

    #[test]
    fn test_empty_tasks_single_point() {
        let series = burndown_series("2024-01-10", None, &[], ts("2024-01-12")).unwrap();
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].ideal, CaseEstimate::ZERO);
        assert_eq!(series.points[0].actual, Some(CaseEstimate::ZERO));
    }

    #[test]
    fn test_invalid_start_is_error() {
        assert!(burndown_series("not a date", None, &tasks(), ts("2024-01-12")).is_err());
    }

    #[test]
    fn test_series_stops_at_calendar_limit() {
        let tasks = vec![Task::new("Migration", TaskStatus::Pending).with_estimate(TShirtSize::Xlg)];
        let series = burndown_series("+262142-12-31", None, &tasks, ts("2024-01-15")).unwrap();
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].day, 0);
        assert_eq!(series.points[0].ideal, series.total_effort);
        assert_eq!(series.points[0].actual, None);
    }
}
