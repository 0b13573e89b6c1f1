//! T-shirt size estimates and three-scenario values.
//!
//! Every task may carry a [`TShirtSize`]. Each size maps to a fixed
//! best/likely/worst number of working days.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::ValidationError;

/// Coarse relative-effort category, ordered small to extra-large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TShirtSize {
    Sm,
    Md,
    Lg,
    Xlg,
}

/// Fixed day-count table, indexed in [`TShirtSize`] order.
const ESTIMATE_DAYS: [CaseEstimate<f64>; 4] = [
    CaseEstimate::new(1.0, 2.0, 3.0),  // SM: 1-3 days
    CaseEstimate::new(2.0, 3.0, 5.0),  // MD: 2-5 days
    CaseEstimate::new(3.0, 5.0, 8.0),  // LG: 3-8 days
    CaseEstimate::new(5.0, 8.0, 13.0), // XLG: 5-13 days
];

impl TShirtSize {
    pub const ALL: [TShirtSize; 4] = [TShirtSize::Sm, TShirtSize::Md, TShirtSize::Lg, TShirtSize::Xlg];

    /// Day estimates for this size.
    pub fn estimate_days(self) -> CaseEstimate<f64> {
        ESTIMATE_DAYS[self as usize]
    }

    /// Short label used in the UI and on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sm => "SM",
            Self::Md => "MD",
            Self::Lg => "LG",
            Self::Xlg => "XLG",
        }
    }

    /// Size whose likely estimate is closest to `likely_days`.
    ///
    /// Ties resolve to the smaller size.
    pub fn nearest(likely_days: f64) -> Self {
        let mut best = TShirtSize::Sm;
        let mut best_gap = f64::INFINITY;
        for size in Self::ALL {
            let gap = (size.estimate_days().likely - likely_days).abs();
            if gap < best_gap {
                best = size;
                best_gap = gap;
            }
        }
        best
    }
}

impl fmt::Display for TShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TShirtSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SM" => Ok(Self::Sm),
            "MD" => Ok(Self::Md),
            "LG" => Ok(Self::Lg),
            "XLG" => Ok(Self::Xlg),
            _ => Err(ValidationError::UnknownSize(s.to_string())),
        }
    }
}

/// Day estimates for an optional size; an unsized task contributes nothing.
pub fn lookup(size: Option<TShirtSize>) -> CaseEstimate<f64> {
    size.map(TShirtSize::estimate_days).unwrap_or_default()
}

/// A value per estimation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseEstimate<T> {
    pub best: T,
    pub likely: T,
    pub worst: T,
}

impl<T> CaseEstimate<T> {
    pub const fn new(best: T, likely: T, worst: T) -> Self {
        Self { best, likely, worst }
    }

    /// Apply `f` to each scenario.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CaseEstimate<U> {
        CaseEstimate {
            best: f(self.best),
            likely: f(self.likely),
            worst: f(self.worst),
        }
    }

    /// Combine two estimates scenario by scenario.
    pub fn zip_with<U, V>(self, other: CaseEstimate<U>, mut f: impl FnMut(T, U) -> V) -> CaseEstimate<V> {
        CaseEstimate {
            best: f(self.best, other.best),
            likely: f(self.likely, other.likely),
            worst: f(self.worst, other.worst),
        }
    }
}

impl<T: Copy> CaseEstimate<T> {
    /// Same value in every scenario.
    pub const fn splat(value: T) -> Self {
        Self {
            best: value,
            likely: value,
            worst: value,
        }
    }
}

impl CaseEstimate<f64> {
    pub const ZERO: Self = Self::splat(0.0);

    pub fn is_zero(&self) -> bool {
        self.best == 0.0 && self.likely == 0.0 && self.worst == 0.0
    }

    /// `best <= likely <= worst`
    pub fn is_ordered(&self) -> bool {
        self.best <= self.likely && self.likely <= self.worst
    }
}

impl Add for CaseEstimate<f64> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sum for CaseEstimate<f64> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
