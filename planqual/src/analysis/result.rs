// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Exportable result records

use super::aggregator::{AggregationTable, OperatorKey};
use crate::ops::{NameRef, OpType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Statistics of one expression under one operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResult {
    pub expr_name: NameRef,
    pub op_type: OpType,
    pub is_supported: bool,
    pub count: u64,
    pub stages: BTreeSet<i32>,
}

/// Statistics of one operator within one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecResult {
    #[serde(rename = "sqlID")]
    pub sql_id: i64,
    pub exec_name: NameRef,
    pub op_type: OpType,
    pub is_supported: bool,
    pub count: u64,
    pub stages: BTreeSet<i32>,
    pub expressions: Vec<ExpressionResult>,
}

/// Flatten a table into one record per (query, operator)
///
/// Neither the records nor their nested expressions come in any particular
/// order.
pub fn project(table: &AggregationTable) -> Vec<ExecResult> {
    let mut nested: HashMap<OperatorKey, Vec<ExpressionResult>> = HashMap::new();
    for (key, agg) in table.expressions() {
        let owner = OperatorKey {
            sql_id: key.sql_id,
            operator: key.operator.clone(),
        };
        nested.entry(owner).or_default().push(ExpressionResult {
            expr_name: key.expression.name.clone(),
            op_type: key.expression.op_type,
            is_supported: key.expression.is_supported,
            count: agg.count,
            stages: agg.stages.clone(),
        });
    }

    table
        .operators()
        .map(|(key, agg)| ExecResult {
            sql_id: key.sql_id,
            exec_name: key.operator.name.clone(),
            op_type: key.operator.op_type,
            is_supported: key.operator.is_supported,
            count: agg.count,
            stages: agg.stages.clone(),
            expressions: nested.remove(key).unwrap_or_default(),
        })
        .collect()
}

/// Like [`project`], ordered by query, operator name, type and support flag
pub fn project_sorted(table: &AggregationTable) -> Vec<ExecResult> {
    let mut results = project(table);
    for result in &mut results {
        result
            .expressions
            .sort_by(|a, b| (&a.expr_name, a.is_supported).cmp(&(&b.expr_name, b.is_supported)));
    }
    results.sort_by(|a, b| {
        (a.sql_id, &a.exec_name, a.op_type, a.is_supported).cmp(&(
            b.sql_id,
            &b.exec_name,
            b.op_type,
            b.is_supported,
        ))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PlanAggregator;
    use crate::plan::ExecInfo;

    #[test]
    fn test_project_nests_expressions_under_owner() {
        let mut aggregator = PlanAggregator::new();
        aggregator.analyze(&[
            ExecInfo::new(3, 1, "WindowExec", OpType::Exec, true)
                .with_stages([1])
                .with_expressions(["avg", "rank"]),
            ExecInfo::new(3, 2, "ProjectExec", OpType::Exec, true).with_expressions(["avg"]),
        ]);

        let results = project_sorted(aggregator.table());
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].exec_name.as_str(), "ProjectExec");
        assert_eq!(results[0].expressions.len(), 1);

        let window = &results[1];
        assert_eq!(window.exec_name.as_str(), "WindowExec");
        let names: Vec<&str> = window.expressions.iter().map(|e| e.expr_name.as_str()).collect();
        assert_eq!(names, vec!["avg", "rank"]);
        assert!(window.expressions.iter().all(|e| e.op_type == OpType::Expr));
    }

    #[test]
    fn test_project_empty_table() {
        assert!(project(&AggregationTable::new()).is_empty());
    }

    #[test]
    fn test_exec_result_serializes_sql_id() {
        let mut aggregator = PlanAggregator::new();
        aggregator.analyze(&[ExecInfo::new(7, 1, "SortExec", OpType::Exec, false).with_stages([2])]);

        let json = serde_json::to_value(project(aggregator.table())).unwrap();
        assert_eq!(json[0]["sqlID"].as_i64(), Some(7));
        assert_eq!(json[0]["exec_name"].as_str(), Some("SortExec"));
        assert_eq!(json[0]["stages"], serde_json::json!([2]));
    }
}
