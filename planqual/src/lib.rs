// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! planqual - GPU qualification statistics for query plans
//!
//! planqual reads the physical plans of a query engine and works out, per
//! operator and per expression, whether each construct can run on an
//! accelerated execution path. The classification is then counted per query
//! for reporting.
//!
//! # Pipeline
//!
//! - **Parsing**: one [`ExecParser`] per operator kind turns a raw plan node
//!   into an [`ExecInfo`], asking a [`SupportChecker`] about support and speedup
//! - **Aggregation**: [`PlanAggregator`] walks classified trees and merges
//!   repeated operators into per-query counts and stage sets
//! - **Projection**: [`project`] flattens the table into [`ExecResult`] records
//!
//! # Usage
//!
//! ```rust,ignore
//! use planqual::{OperatorSupportTable, PlanAnalyzer, RawPlanNode};
//!
//! let checker = OperatorSupportTable::new().with_operator("WindowExec", 2.5);
//! let plan = vec![RawPlanNode::new(1, "Window", "Window avg(x) over (partition by y)")];
//!
//! let mut analyzer = PlanAnalyzer::default();
//! analyzer.add_query(7, &plan, &checker);
//! for result in analyzer.results() {
//!     println!("{} {} x{}", result.sql_id, result.exec_name, result.count);
//! }
//! ```

pub mod analysis;
pub mod analyzer;
pub mod checker;
pub mod config;
pub mod ops;
pub mod parser;
pub mod plan;

pub use analysis::{
    project, project_sorted, AggregationTable, ExecResult, ExpressionResult, PlanAggregator,
};
pub use analyzer::PlanAnalyzer;
pub use checker::{OperatorSupportTable, SupportChecker};
pub use config::{ConfigError, ParserConfig};
pub use ops::{ExpressionIdentity, NameRef, OpType, OperatorIdentity};
pub use parser::{ExecParseError, ExecParser, ExecParserRegistry, WindowExecParser};
pub use plan::{ExecInfo, ExprRef, PlanClassifier, RawPlanNode};

/// planqual version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
