// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator parser error types

use thiserror::Error;

/// Errors raised while turning raw plan nodes into classified records
#[derive(Error, Debug)]
pub enum ExecParseError {
    #[error("Unbalanced delimiters in description of {operator}: {description}")]
    UnbalancedDelimiters {
        operator: String,
        description: String,
    },

    #[error("Malformed plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}
