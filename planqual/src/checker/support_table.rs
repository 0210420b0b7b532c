// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory support table

use super::SupportChecker;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Support rules held in memory
///
/// Operators are matched by exact resolved name. Expressions are matched
/// case-insensitively. Anything not listed is unsupported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorSupportTable {
    /// Supported operator name -> speedup factor
    #[serde(default)]
    operators: HashMap<String, f64>,
    /// Supported expression names, lowercased
    #[serde(default)]
    expressions: HashSet<String>,
}

impl OperatorSupportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a JSON document
    ///
    /// ```json
    /// { "operators": { "WindowExec": 2.5 }, "expressions": ["avg", "sum"] }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: OperatorSupportTable = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (name, speedup) in raw.operators {
            table.try_add_operator(&name, speedup)?;
        }
        for expr in raw.expressions {
            table.add_expression(&expr);
        }
        Ok(table)
    }

    /// Mark an operator supported with the given speedup factor
    pub fn with_operator(mut self, name: &str, speedup_factor: f64) -> Self {
        self.operators.insert(name.to_string(), speedup_factor.max(0.0));
        self
    }

    /// Mark an expression supported
    pub fn with_expression(mut self, name: &str) -> Self {
        self.add_expression(name);
        self
    }

    fn try_add_operator(&mut self, name: &str, speedup_factor: f64) -> Result<(), ConfigError> {
        if !speedup_factor.is_finite() || speedup_factor < 0.0 {
            return Err(ConfigError::InvalidSpeedup {
                operator: name.to_string(),
                value: speedup_factor,
            });
        }
        self.operators.insert(name.to_string(), speedup_factor);
        Ok(())
    }

    fn add_expression(&mut self, name: &str) {
        self.expressions.insert(name.to_lowercase());
    }

    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }
}

impl SupportChecker for OperatorSupportTable {
    fn is_operator_supported(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    fn get_speedup_factor(&self, name: &str) -> f64 {
        self.operators.get(name).copied().unwrap_or(1.0)
    }

    fn get_unsupported_expressions(&self, expressions: &[String]) -> Vec<String> {
        expressions
            .iter()
            .filter(|expr| !self.expressions.contains(&expr.to_lowercase()))
            .cloned()
            .collect()
    }
}
