// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Raw and classified plan trees
//!
//! Raw nodes come from the query engine's plan graph. The classifier runs each
//! raw node through its operator parser and produces the classified tree that
//! the aggregator consumes.

pub mod classifier;
pub mod exec_info;
pub mod raw;

pub use classifier::PlanClassifier;
pub use exec_info::{ExecInfo, ExprRef};
pub use raw::RawPlanNode;
