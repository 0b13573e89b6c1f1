//! Task records consumed by the burndown engine.
//!
//! Tasks are owned and stored elsewhere; the engine only reads them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::estimate::TShirtSize;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A task inside an iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Absent estimate contributes zero effort.
    #[serde(default)]
    pub estimate: Option<TShirtSize>,
    /// ISO-8601 completion timestamp.
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            status,
            priority: Priority::default(),
            estimate: None,
            completed_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_estimate(mut self, size: TShirtSize) -> Self {
        self.estimate = Some(size);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_completed_at(mut self, at: impl Into<String>) -> Self {
        self.completed_at = Some(at.into());
        self
    }

    /// Move the task to `status`.
    ///
    /// Entering `completed` stamps `completed_at` with `now`; any other status
    /// clears it.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        if status == TaskStatus::Completed {
            if self.status != TaskStatus::Completed || self.completed_at.is_none() {
                self.completed_at = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
            }
        } else {
            self.completed_at = None;
        }
        self.status = status;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
