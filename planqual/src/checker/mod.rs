// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Compatibility checks consulted by operator parsers
//!
//! The rule table deciding what runs on the accelerated path lives outside
//! this crate. Parsers only see it through the [`SupportChecker`] trait.

mod support_table;

pub use support_table::OperatorSupportTable;

/// Read-only capability answering compatibility questions
pub trait SupportChecker: Send + Sync {
    /// Whether the resolved operator name can run accelerated
    fn is_operator_supported(&self, name: &str) -> bool;

    /// Estimated speedup for the resolved operator name, never negative
    fn get_speedup_factor(&self, name: &str) -> f64;

    /// Subset of `expressions` that cannot run accelerated
    fn get_unsupported_expressions(&self, expressions: &[String]) -> Vec<String>;
}
