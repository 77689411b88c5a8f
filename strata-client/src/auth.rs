//! API credentials
//!
//! The client never looks up credentials on its own. Callers build a
//! [`Credentials`] value and hand it to [`crate::StrataClient`]; the helpers here
//! exist for binaries that want to source the token from the environment or a
//! token file.

use std::path::Path;

use crate::error::{ClientError, Result};

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "STRATA_TOKEN";

/// Bearer token attached to every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wraps a token, rejecting blank ones
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ClientError::Credentials("token cannot be empty".to_string()));
        }
        Ok(Self { token })
    }

    /// Reads the token from `STRATA_TOKEN`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            ClientError::Credentials(format!("{} environment variable not set", TOKEN_ENV_VAR))
        })?;
        Self::new(token)
    }

    /// Reads the token from a file containing only the token
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Credentials(format!("failed to read token file {}: {}", path.display(), e))
        })?;
        Self::new(contents)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}
