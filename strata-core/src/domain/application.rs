//! Application domain model
//!
//! An application is a registered API consumer that owns its own credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Client identifier issued by the platform
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
