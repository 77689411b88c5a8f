//! Uploaded data domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A data object stored on the platform, usable as job input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}
