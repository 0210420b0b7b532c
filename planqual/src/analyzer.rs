// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Entry point tying classification and aggregation together

use crate::analysis::{project, project_sorted, AggregationTable, ExecResult, PlanAggregator};
use crate::checker::SupportChecker;
use crate::config::ParserConfig;
use crate::parser::ExecParserRegistry;
use crate::plan::{ExecInfo, PlanClassifier, RawPlanNode};

/// Classifies raw plans and accumulates their statistics
///
/// One analyzer owns one table. Run several analyzers for parallel work and
/// combine their tables with [`AggregationTable::merge`].
#[derive(Debug, Default)]
pub struct PlanAnalyzer {
    classifier: PlanClassifier,
    aggregator: PlanAggregator,
}

impl PlanAnalyzer {
    pub fn new(registry: ExecParserRegistry, config: ParserConfig) -> Self {
        Self {
            classifier: PlanClassifier::new(registry, config),
            aggregator: PlanAggregator::new(),
        }
    }

    /// Classify a query's raw plan forest and add it to the statistics
    ///
    /// Returns the classified forest so callers can inspect per-node records.
    pub fn add_query(
        &mut self,
        sql_id: i64,
        roots: &[RawPlanNode],
        checker: &dyn SupportChecker,
    ) -> Vec<ExecInfo> {
        let classified = self.classifier.classify(sql_id, roots, checker);
        self.aggregator.analyze(&classified);
        classified
    }

    /// Add an already classified forest
    pub fn add_classified(&mut self, roots: &[ExecInfo]) {
        self.aggregator.analyze(roots);
    }

    pub fn table(&self) -> &AggregationTable {
        self.aggregator.table()
    }

    pub fn results(&self) -> Vec<ExecResult> {
        project(self.aggregator.table())
    }

    pub fn results_sorted(&self) -> Vec<ExecResult> {
        project_sorted(self.aggregator.table())
    }

    pub fn into_table(self) -> AggregationTable {
        self.aggregator.into_table()
    }
}
