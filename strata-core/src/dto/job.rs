//! Job DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::job::{FailureType, Job, JobState};

/// Request to submit a new job against an analytic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitJob {
    pub analytic_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
    /// Ids of previously uploaded data objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_data: Vec<String>,
}

impl SubmitJob {
    pub fn new(analytic_id: impl Into<String>) -> Self {
        Self {
            analytic_id: analytic_id.into(),
            ..Default::default()
        }
    }

    /// Adds a parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// Adds an input data object
    pub fn with_input(mut self, data_id: impl Into<String>) -> Self {
        self.input_data.push(data_id.into());
        self
    }
}

/// Filters for listing jobs, sent as query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Lightweight job summary for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub name: Option<String>,
    pub state: JobState,
    pub failure_type: FailureType,
    pub analytic_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            name: job.name,
            state: job.state,
            failure_type: job.failure_type,
            analytic_id: job.analytic_id,
            created_at: job.created_at,
        }
    }
}
