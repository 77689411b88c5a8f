//! Analytic domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An analytic published in the platform catalog
///
/// Jobs are submitted against an analytic by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytic {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Parameters the analytic accepts, keyed by parameter name
    #[serde(default)]
    pub inputs: HashMap<String, InputDefinition>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Declaration of a single analytic parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefinition {
    #[serde(rename = "type")]
    pub input_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl Analytic {
    /// Names of the parameters that must be supplied on submission
    pub fn required_inputs(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inputs
            .iter()
            .filter(|(_, input)| input.required && input.default.is_none())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_inputs_skip_defaults() {
        let analytic: Analytic = serde_json::from_str(
            r#"{
                "id": "an-1",
                "name": "word-count",
                "version": "1.2.0",
                "inputs": {
                    "corpus": {"type": "data", "required": true},
                    "min_len": {"type": "integer", "required": true, "default": 3},
                    "lang": {"type": "string"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(analytic.required_inputs(), vec!["corpus"]);
        assert_eq!(analytic.inputs["lang"].input_type, "string");
    }
}
