//! Team estimation sessions.
//!
//! A manager opens a session, participants join, and the manager puts one
//! task at a time up for estimation. Each participant submits a three-point
//! estimate in days; the consensus is the per-scenario average.
//!
//! Round lifecycle:
//!
//! ```text
//!   Waiting --select(task)--> Active --lock--> Locked
//!      ^                        |  ^             |
//!      +-----select(none)-------+  +---unlock----+
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::estimate::{CaseEstimate, TShirtSize};
use crate::task::Task;

/// State of the current estimation round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Waiting,
    Active,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

/// A participant's estimate for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub task_id: String,
    pub participant_id: String,
    pub estimate: CaseEstimate<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationSession {
    pub manager_id: String,
    pub participants: Vec<Participant>,
    pub current_task: Option<String>,
    pub round: RoundStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    votes: Vec<Vote>,
}

impl EstimationSession {
    /// Open a session; the manager is the first participant.
    pub fn new(manager_id: impl Into<String>, manager_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let manager_id = manager_id.into();
        Self {
            participants: vec![Participant {
                user_id: manager_id.clone(),
                name: manager_name.into(),
                joined_at: now,
            }],
            manager_id,
            current_task: None,
            round: RoundStatus::Waiting,
            created_at: now,
            votes: Vec::new(),
        }
    }

    /// Add a participant. Joining twice keeps the original entry.
    pub fn join(&mut self, user_id: &str, name: &str, now: DateTime<Utc>) -> &Participant {
        let idx = match self.participants.iter().position(|p| p.user_id == user_id) {
            Some(idx) => idx,
            None => {
                self.participants.push(Participant {
                    user_id: user_id.to_string(),
                    name: name.to_string(),
                    joined_at: now,
                });
                self.participants.len() - 1
            }
        };
        &self.participants[idx]
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    fn require_manager(&self, actor: &str, action: &'static str) -> Result<(), EstimationError> {
        if actor == self.manager_id {
            Ok(())
        } else {
            Err(EstimationError::NotManager { action })
        }
    }

    /// Put a task up for estimation, or clear the current one.
    pub fn select_task(&mut self, actor: &str, task_id: Option<&str>) -> Result<(), EstimationError> {
        self.require_manager(actor, "select tasks")?;
        self.current_task = task_id.map(str::to_string);
        self.round = if self.current_task.is_some() {
            RoundStatus::Active
        } else {
            RoundStatus::Waiting
        };
        Ok(())
    }

    /// Record `actor`'s estimate for the current task, replacing any earlier one.
    pub fn submit_vote(
        &mut self,
        actor: &str,
        task_id: &str,
        estimate: CaseEstimate<f64>,
    ) -> Result<(), EstimationError> {
        if !self.is_participant(actor) {
            return Err(EstimationError::NotParticipant(actor.to_string()));
        }
        if self.round != RoundStatus::Active {
            return Err(EstimationError::RoundNotActive);
        }
        if self.current_task.as_deref() != Some(task_id) {
            return Err(EstimationError::TaskNotCurrent {
                task_id: task_id.to_string(),
            });
        }
        validate_vote(&estimate)?;

        match self
            .votes
            .iter_mut()
            .find(|v| v.task_id == task_id && v.participant_id == actor)
        {
            Some(existing) => existing.estimate = estimate,
            None => self.votes.push(Vote {
                task_id: task_id.to_string(),
                participant_id: actor.to_string(),
                estimate,
            }),
        }
        Ok(())
    }

    pub fn lock(&mut self, actor: &str) -> Result<(), EstimationError> {
        self.require_manager(actor, "lock estimates")?;
        self.round = RoundStatus::Locked;
        Ok(())
    }

    pub fn unlock(&mut self, actor: &str) -> Result<(), EstimationError> {
        self.require_manager(actor, "unlock estimates")?;
        self.round = RoundStatus::Active;
        Ok(())
    }

    pub fn votes_for<'a>(&'a self, task_id: &'a str) -> impl Iterator<Item = &'a Vote> + 'a {
        self.votes.iter().filter(move |v| v.task_id == task_id)
    }

    /// Average estimate for a task, or `None` before anyone has voted.
    pub fn consensus(&self, task_id: &str) -> Option<CaseEstimate<f64>> {
        let estimates: Vec<_> = self.votes_for(task_id).map(|v| v.estimate).collect();
        consensus(&estimates)
    }

    /// Write the agreed size onto `task`.
    pub fn finalize(&self, actor: &str, task: &mut Task, size: TShirtSize) -> Result<(), EstimationError> {
        self.require_manager(actor, "save final estimates")?;
        tracing::debug!(task = %task.id, size = %size, "final estimate saved");
        task.estimate = Some(size);
        Ok(())
    }
}

fn validate_vote(estimate: &CaseEstimate<f64>) -> Result<(), EstimationError> {
    let values = [estimate.best, estimate.likely, estimate.worst];
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(EstimationError::InvalidVote(
            "days must be finite and non-negative".to_string(),
        ));
    }
    if !estimate.is_ordered() {
        return Err(EstimationError::InvalidVote(
            "expected best <= likely <= worst".to_string(),
        ));
    }
    Ok(())
}

/// Per-scenario mean of `estimates`, rounded to one decimal.
pub fn consensus(estimates: &[CaseEstimate<f64>]) -> Option<CaseEstimate<f64>> {
    if estimates.is_empty() {
        return None;
    }
    let n = estimates.len() as f64;
    let sum: CaseEstimate<f64> = estimates.iter().copied().sum();
    Some(sum.map(|total| (total / n * 10.0).round() / 10.0))
}

/// Size whose likely estimate best matches a consensus.
pub fn consensus_size(consensus: &CaseEstimate<f64>) -> TShirtSize {
    TShirtSize::nearest(consensus.likely)
}
