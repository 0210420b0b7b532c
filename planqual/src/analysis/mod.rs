// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Per-query operator statistics
//!
//! The aggregator walks classified plan trees and counts how often each
//! operator and expression occurs and in which stages. The projector flattens
//! the accumulated table into exportable result records.

pub mod aggregator;
pub mod result;

pub use aggregator::{
    AggregationTable, ExpressionAggregate, ExpressionKey, OperatorAggregate, OperatorKey,
    PlanAggregator,
};
pub use result::{project, project_sorted, ExecResult, ExpressionResult};
