// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Plan aggregation
//!
//! Repeated occurrences of the same operator anywhere in a query's plan merge
//! into one aggregate, whatever their position in the tree.

use crate::ops::{ExpressionIdentity, OperatorIdentity};
use crate::plan::ExecInfo;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Key of an operator aggregate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorKey {
    pub sql_id: i64,
    pub operator: OperatorIdentity,
}

/// Key of an expression aggregate, scoped under its operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpressionKey {
    pub sql_id: i64,
    pub operator: OperatorIdentity,
    pub expression: ExpressionIdentity,
}

/// Occurrence count and stage membership of one operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorAggregate {
    pub count: u64,
    pub stages: BTreeSet<i32>,
}

/// Occurrence count and stage membership of one expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionAggregate {
    pub count: u64,
    pub stages: BTreeSet<i32>,
}

impl OperatorAggregate {
    fn record(&mut self, stages: &BTreeSet<i32>) {
        self.count += 1;
        self.stages.extend(stages.iter().copied());
    }
}

impl ExpressionAggregate {
    fn record(&mut self, stages: &BTreeSet<i32>) {
        self.count += 1;
        self.stages.extend(stages.iter().copied());
    }
}

/// Accumulated statistics for any number of queries
///
/// Every expression key has a matching operator key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationTable {
    operators: HashMap<OperatorKey, OperatorAggregate>,
    expressions: HashMap<ExpressionKey, ExpressionAggregate>,
}

impl AggregationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Number of distinct (query, operator) entries
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    pub fn operators(&self) -> impl Iterator<Item = (&OperatorKey, &OperatorAggregate)> {
        self.operators.iter()
    }

    pub fn expressions(&self) -> impl Iterator<Item = (&ExpressionKey, &ExpressionAggregate)> {
        self.expressions.iter()
    }

    pub fn operator(&self, sql_id: i64, operator: &OperatorIdentity) -> Option<&OperatorAggregate> {
        self.operators.get(&OperatorKey {
            sql_id,
            operator: operator.clone(),
        })
    }

    pub fn expression(
        &self,
        sql_id: i64,
        operator: &OperatorIdentity,
        expression: &ExpressionIdentity,
    ) -> Option<&ExpressionAggregate> {
        self.expressions.get(&ExpressionKey {
            sql_id,
            operator: operator.clone(),
            expression: expression.clone(),
        })
    }

    /// Fold one classified node (not its children) into the table
    fn record_node(&mut self, node: &ExecInfo) {
        let operator = OperatorIdentity::new(node.name.clone(), node.op_type, node.is_supported);
        self.operators
            .entry(OperatorKey {
                sql_id: node.sql_id,
                operator: operator.clone(),
            })
            .or_default()
            .record(&node.stages);

        for expr in node.expressions() {
            if expr.name.is_empty() {
                continue;
            }
            // Expressions take the owning operator's support flag
            let expression = ExpressionIdentity::new(expr.name.clone(), node.is_supported);
            self.expressions
                .entry(ExpressionKey {
                    sql_id: node.sql_id,
                    operator: operator.clone(),
                    expression,
                })
                .or_default()
                .record(&node.stages);
        }
    }

    /// Add another table into this one
    ///
    /// Counts are summed and stage sets unioned, so merging is commutative and
    /// equals analysing both inputs into a single table.
    pub fn merge(&mut self, other: AggregationTable) {
        for (key, agg) in other.operators {
            let entry = self.operators.entry(key).or_default();
            entry.count += agg.count;
            entry.stages.extend(agg.stages);
        }
        for (key, agg) in other.expressions {
            let entry = self.expressions.entry(key).or_default();
            entry.count += agg.count;
            entry.stages.extend(agg.stages);
        }
    }
}

/// Walks classified plan forests and accumulates an [`AggregationTable`]
#[derive(Debug, Default)]
pub struct PlanAggregator {
    table: AggregationTable,
}

impl PlanAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every node of the forest once, in pre-order
    ///
    /// The table is additive: calling this again with another forest, for the
    /// same or a different query, adds to what is already recorded.
    pub fn analyze(&mut self, roots: &[ExecInfo]) {
        let mut stack: Vec<&ExecInfo> = roots.iter().rev().collect();
        let mut visited = 0usize;
        let mut skipped = 0usize;

        while let Some(node) = stack.pop() {
            visited += 1;
            if node.is_placeholder() {
                skipped += 1;
            } else {
                self.table.record_node(node);
            }
            stack.extend(node.children.iter().rev());
        }

        log::debug!(
            "PLAN AGGREGATOR: visited {} nodes, skipped {} placeholders, {} operator entries",
            visited,
            skipped,
            self.table.operator_count()
        );
    }

    /// Aggregate independent forests on the rayon pool and merge the results
    pub fn analyze_parallel(forests: &[Vec<ExecInfo>]) -> AggregationTable {
        forests
            .par_iter()
            .map(|roots| {
                let mut aggregator = PlanAggregator::new();
                aggregator.analyze(roots);
                aggregator.into_table()
            })
            .reduce(AggregationTable::new, |mut acc, table| {
                acc.merge(table);
                acc
            })
    }

    pub fn table(&self) -> &AggregationTable {
        &self.table
    }

    pub fn into_table(self) -> AggregationTable {
        self.table
    }
}
