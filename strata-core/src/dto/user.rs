//! User DTOs
//!
//! Data transfer objects for user administration.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserRole;

/// Request to create a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email address
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Role granted to the new user
    pub role: UserRole,
}
