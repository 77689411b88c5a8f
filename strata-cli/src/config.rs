//! Configuration module
//!
//! Resolves the platform URL and credentials from command-line arguments
//! (which clap already falls back to environment variables for).

use anyhow::{Context, Result};
use strata_client::{Credentials, StrataClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the platform API
    pub base_url: String,
    /// Credentials attached to every request
    pub credentials: Credentials,
}

impl Config {
    /// Builds the configuration, preferring an explicit token over a token file
    pub fn load(base_url: String, token: Option<String>, token_file: Option<String>) -> Result<Self> {
        let credentials = match (token, token_file) {
            (Some(token), _) => Credentials::new(token)?,
            (None, Some(path)) => Credentials::from_file(&path)
                .with_context(|| format!("Failed to load token from {}", path))?,
            (None, None) => {
                anyhow::bail!("No API token given; set STRATA_TOKEN or STRATA_TOKEN_FILE")
            }
        };

        let config = Self {
            base_url,
            credentials,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("url must start with http:// or https://");
        }

        Ok(())
    }

    /// Creates a client for the configured platform
    pub fn client(&self) -> StrataClient {
        StrataClient::new(&self.base_url, self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:8080";

    #[test]
    fn test_token_argument_wins() {
        let config = Config::load(URL.to_string(), Some("abc".to_string()), Some("/nope".to_string()))
            .unwrap();
        assert_eq!(config.credentials.token(), "abc");
    }

    #[test]
    fn test_token_file_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "from-file\n").unwrap();

        let config = Config::load(
            URL.to_string(),
            None,
            Some(path.to_string_lossy().into_owned()),
        )
        .unwrap();
        assert_eq!(config.credentials.token(), "from-file");
    }

    #[test]
    fn test_missing_token_fails() {
        assert!(Config::load(URL.to_string(), None, None).is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(Config::load("not-a-url".to_string(), Some("abc".to_string()), None).is_err());
        assert!(Config::load(String::new(), Some("abc".to_string()), None).is_err());
        assert!(Config::load("https://api.strata.example".to_string(), Some("abc".to_string()), None).is_ok());
    }
}
