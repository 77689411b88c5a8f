//! Job domain types
//!
//! A job is one unit of analytic work submitted to the platform. Its state is
//! owned by the platform and only ever moves forward:
//!
//! ```text
//! READY -> QUEUED -> [SCHEDULED] -> RUNNING -> COMPLETE | FAILED
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of a submitted job as reported by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier assigned by the platform at submission time
    pub id: String,

    /// Current lifecycle state
    pub state: JobState,

    /// Fault attribution, only meaningful when `state` is `FAILED`
    #[serde(default)]
    pub failure_type: FailureType,

    /// After this instant the platform may garbage-collect the job output
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,

    /// Analytic this job runs
    #[serde(default)]
    pub analytic_id: Option<String>,

    /// Human readable name given at submission
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Parameters the job was submitted with
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,

    /// Failure description supplied by the platform, if any
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Job {
    /// Returns the failure attribution of a failed job.
    ///
    /// `None` when the job has not failed, or failed without attribution.
    pub fn failure_attribution(&self) -> Option<FailureType> {
        if self.state.is_failure() && self.failure_type != FailureType::None {
            Some(self.failure_type)
        } else {
            None
        }
    }

    /// A failure type other than `NONE` is only valid on a failed job
    pub fn is_consistent(&self) -> bool {
        self.failure_type == FailureType::None || self.state.is_failure()
    }

    /// Whether the advisory expiration has passed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expiration| expiration <= now)
    }
}

/// Job lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Ready,
    Queued,
    Scheduled,
    Running,
    Complete,
    Failed,
}

impl JobState {
    /// All states in lifecycle order
    pub const ALL: [JobState; 6] = [
        JobState::Ready,
        JobState::Queued,
        JobState::Scheduled,
        JobState::Running,
        JobState::Complete,
        JobState::Failed,
    ];

    /// `COMPLETE` and `FAILED`; no further progress follows either
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Complete | JobState::Failed)
    }

    pub fn is_success(self) -> bool {
        self == JobState::Complete
    }

    pub fn is_failure(self) -> bool {
        self == JobState::Failed
    }

    // Both terminal states share the last rank.
    fn rank(self) -> u8 {
        match self {
            JobState::Ready => 0,
            JobState::Queued => 1,
            JobState::Scheduled => 2,
            JobState::Running => 3,
            JobState::Complete | JobState::Failed => 4,
        }
    }

    /// Whether the platform may legally move a job from `self` to `next`.
    ///
    /// Only strictly forward moves out of a non-terminal state are legal.
    /// Intermediate states may be skipped.
    pub fn can_advance_to(self, next: JobState) -> bool {
        !self.is_terminal() && next.rank() > self.rank()
    }

    /// Wire representation, e.g. `"RUNNING"`
    pub fn as_str(self) -> &'static str {
        match self {
            JobState::Ready => "READY",
            JobState::Queued => "QUEUED",
            JobState::Scheduled => "SCHEDULED",
            JobState::Running => "RUNNING",
            JobState::Complete => "COMPLETE",
            JobState::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown job state: {}", s))
    }
}

/// Who is at fault for a failed job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureType {
    /// Bad input or parameters supplied by the caller
    User,
    /// The analytic itself failed
    Analytic,
    /// Platform infrastructure failed
    Platform,
    #[default]
    None,
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureType::User => write!(f, "USER"),
            FailureType::Analytic => write!(f, "ANALYTIC"),
            FailureType::Platform => write!(f, "PLATFORM"),
            FailureType::None => write!(f, "NONE"),
        }
    }
}
