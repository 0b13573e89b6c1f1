//! Velocity-based completion date projection.

use chrono::{DateTime, Duration, Utc};

use super::effort::burned_effort;
use super::time::{days_between, MS_PER_DAY};
use crate::estimate::CaseEstimate;

/// Project a completion date per scenario from the velocity observed so far.
///
/// Velocity is the best-case burned effort per elapsed calendar day (at
/// least one day). With nothing burned yet the velocity is one effort-day per
/// calendar day. Every scenario shares that velocity. The projection is
/// `start + remaining / velocity` days and never falls before `now`.
pub fn expected_end_date(
    start: DateTime<Utc>,
    total: CaseEstimate<f64>,
    completed: CaseEstimate<f64>,
    in_progress: CaseEstimate<f64>,
    now: DateTime<Utc>,
) -> CaseEstimate<DateTime<Utc>> {
    let progress = burned_effort(completed, in_progress);
    let elapsed_days = days_between(start, now).max(1.0);
    let velocity = if progress.best == 0.0 {
        1.0
    } else {
        progress.best / elapsed_days
    };

    total
        .zip_with(progress, |total, burned| (total - burned).max(0.0))
        .map(|remaining| offset_days(start, remaining / velocity).max(now))
}

/// `start + days`, saturating at the representable range.
fn offset_days(start: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    let ms = (days * MS_PER_DAY).trunc();
    if !ms.is_finite() || ms >= i64::MAX as f64 {
        return DateTime::<Utc>::MAX_UTC;
    }
    Duration::try_milliseconds(ms as i64)
        .and_then(|offset| start.checked_add_signed(offset))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
