//! Grammar configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for the Oracle grammar, typically loaded once at startup.
///
/// ```json
/// { "quoting": true }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Whether identifiers are wrapped in `"` delimiters. Off by
    /// default: quoted identifiers are case-sensitive in Oracle.
    #[serde(default)]
    pub quoting: bool,
}

impl OracleConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Serialization`] if the JSON is
    /// malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Io`] if the file cannot be read,
    /// or [`crate::ConfigError::Serialization`] if its contents are
    /// malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_unquoted() {
        assert!(!OracleConfig::default().quoting);
    }

    #[test]
    fn test_from_json() {
        let config = OracleConfig::from_json(r#"{ "quoting": true }"#).unwrap();
        assert!(config.quoting);

        // Missing key falls back to the default.
        let config = OracleConfig::from_json("{}").unwrap();
        assert!(!config.quoting);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(OracleConfig::from_json("{ quoting: yes }").is_err());
    }
}
