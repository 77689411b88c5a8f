//! User domain model
//!
//! Represents an account on the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: String,

    /// Login email address
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Administrative role
    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// May manage users and applications
    Admin,

    /// May submit jobs and upload data
    #[default]
    Member,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Member => write!(f, "Member"),
        }
    }
}
