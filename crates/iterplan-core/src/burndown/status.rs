//! Iteration health classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::estimate::CaseEstimate;

/// Effort lead over time (as a fraction) at or above which an iteration is ahead.
pub const AHEAD_THRESHOLD: f64 = 0.20;
/// Lag strictly above which an iteration is still on track.
pub const ON_TRACK_THRESHOLD: f64 = -0.10;
/// Lag strictly above which an iteration is at risk rather than behind.
pub const AT_RISK_THRESHOLD: f64 = -0.20;

/// Health of an iteration's trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BurndownStatus {
    Ahead,
    OnTrack,
    AtRisk,
    Behind,
}

impl BurndownStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ahead => "ahead",
            Self::OnTrack => "on-track",
            Self::AtRisk => "at-risk",
            Self::Behind => "behind",
        }
    }
}

impl fmt::Display for BurndownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundaries on `effort% - time%` (as fractions) used by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    #[serde(default = "default_ahead")]
    pub ahead: f64,
    #[serde(default = "default_on_track")]
    pub on_track: f64,
    #[serde(default = "default_at_risk")]
    pub at_risk: f64,
}

fn default_ahead() -> f64 {
    AHEAD_THRESHOLD
}
fn default_on_track() -> f64 {
    ON_TRACK_THRESHOLD
}
fn default_at_risk() -> f64 {
    AT_RISK_THRESHOLD
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            ahead: AHEAD_THRESHOLD,
            on_track: ON_TRACK_THRESHOLD,
            at_risk: AT_RISK_THRESHOLD,
        }
    }
}

impl StatusThresholds {
    /// Check `ahead > on_track > at_risk` with every bound in `[-1, 1]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("ahead", self.ahead), ("on_track", self.on_track), ("at_risk", self.at_risk)] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{value} is outside [-1, 1]"),
                });
            }
        }
        if !(self.ahead > self.on_track && self.on_track > self.at_risk) {
            return Err(ValidationError::InvalidValue {
                field: "thresholds".to_string(),
                message: format!(
                    "expected ahead > on_track > at_risk, got {} / {} / {}",
                    self.ahead, self.on_track, self.at_risk
                ),
            });
        }
        Ok(())
    }

    /// Bucket a difference between effort and time progress.
    pub fn bucket(&self, diff: f64) -> BurndownStatus {
        if diff >= self.ahead {
            BurndownStatus::Ahead
        } else if diff > self.on_track {
            BurndownStatus::OnTrack
        } else if diff > self.at_risk {
            BurndownStatus::AtRisk
        } else {
            BurndownStatus::Behind
        }
    }
}

/// Classify an iteration. The first matching rule wins:
///
/// 1. All likely work done: on track if the end date has passed, else ahead.
/// 2. End date passed with work left: behind.
/// 3. Likely projection lands after the end date: at risk.
/// 4. Iteration not started: on track.
/// 5. Otherwise bucket `effort.likely - time` with `thresholds`.
pub fn classify(
    time_progress: u8,
    effort_progress: &CaseEstimate<u8>,
    end: Option<DateTime<Utc>>,
    expected_end: &CaseEstimate<DateTime<Utc>>,
    now: DateTime<Utc>,
    thresholds: &StatusThresholds,
) -> BurndownStatus {
    let past_end = end.is_some_and(|end| now > end);

    if effort_progress.likely >= 100 {
        return if past_end {
            BurndownStatus::OnTrack
        } else {
            BurndownStatus::Ahead
        };
    }

    if past_end {
        return BurndownStatus::Behind;
    }

    if end.is_some_and(|end| expected_end.likely > end) {
        return BurndownStatus::AtRisk;
    }

    if time_progress == 0 {
        return BurndownStatus::OnTrack;
    }

    let diff = f64::from(effort_progress.likely) / 100.0 - f64::from(time_progress) / 100.0;
    thresholds.bucket((diff * 100.0).round() / 100.0)
}
