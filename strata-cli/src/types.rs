//! Common types used across CLI modules

use serde_json::Value as JsonValue;

/// A `key=value` job parameter given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub key: String,
    pub value: JsonValue,
}

impl Parameter {
    /// Parse a `key=value` pair
    ///
    /// The value is read as JSON when it parses as JSON (`3`, `true`,
    /// `[1,2]`), otherwise it is kept as a plain string.
    pub fn parse(input: &str) -> Result<Self, String> {
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", input))?;

        if key.is_empty() {
            return Err(format!("invalid KEY=value: empty key in `{}`", input));
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()));

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
