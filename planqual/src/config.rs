// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration or support rules
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid speedup factor {value} for operator {operator}")]
    InvalidSpeedup { operator: String, value: f64 },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings shared by the classifier and every operator parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Suffix appended to a node's base name to form the resolved exec name
    pub exec_suffix: String,

    /// Node name prefixes that denote cluster wrappers rather than operators
    pub placeholder_prefixes: Vec<String>,

    /// Expression names dropped while tokenizing descriptions
    pub ignored_expressions: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            exec_suffix: "Exec".to_string(),
            placeholder_prefixes: vec!["WholeStageCodegen".to_string()],
            ignored_expressions: [
                "cast",
                "ansi_cast",
                "promote_precision",
                "checkoverflow",
                "decimal",
                "decimaltype",
                "scalarsubquery",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Invalid(
                "placeholder prefixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolved exec name for a node base name
    pub fn resolve_exec_name(&self, base_name: &str) -> String {
        format!("{}{}", base_name, self.exec_suffix)
    }

    pub fn is_placeholder(&self, base_name: &str) -> bool {
        base_name.is_empty()
            || self
                .placeholder_prefixes
                .iter()
                .any(|prefix| base_name.starts_with(prefix.as_str()))
    }

    pub fn is_ignored_expression(&self, name: &str) -> bool {
        self.ignored_expressions
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.resolve_exec_name("Window"), "WindowExec");
        assert!(config.is_placeholder("WholeStageCodegen (3)"));
        assert!(config.is_placeholder(""));
        assert!(!config.is_placeholder("Window"));
        assert!(config.is_ignored_expression("CAST"));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = ParserConfig::from_json_str(r#"{ "exec_suffix": "" }"#).unwrap();
        assert_eq!(config.resolve_exec_name("Window"), "Window");
        assert_eq!(
            config.placeholder_prefixes,
            ParserConfig::default().placeholder_prefixes
        );
    }

    #[test]
    fn test_config_rejects_empty_prefix() {
        let err = ParserConfig::from_json_str(r#"{ "placeholder_prefixes": [""] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
