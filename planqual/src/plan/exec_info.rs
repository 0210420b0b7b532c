// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Classified plan nodes

use crate::ops::{NameRef, OpType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reference to an expression used by an operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprRef {
    pub name: NameRef,
    pub op_type: OpType,
}

impl ExprRef {
    pub fn new(name: impl Into<NameRef>) -> Self {
        Self {
            name: name.into(),
            op_type: OpType::Expr,
        }
    }
}

/// A plan node after its operator parser has classified it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecInfo {
    /// Query this node belongs to
    pub sql_id: i64,
    pub node_id: i64,
    /// Resolved exec name; empty for placeholder nodes
    pub name: NameRef,
    pub op_type: OpType,
    #[serde(default)]
    pub description: String,
    pub speedup_factor: f64,
    /// Wall time in milliseconds, when the operator reports one
    #[serde(default)]
    pub duration: Option<u64>,
    pub is_supported: bool,
    #[serde(default)]
    pub stages: BTreeSet<i32>,
    /// `None` and an empty list mean the same thing
    #[serde(default)]
    pub expressions: Option<Vec<ExprRef>>,
    #[serde(default)]
    pub unsupported_exprs: Vec<NameRef>,
    #[serde(default)]
    pub children: Vec<ExecInfo>,
}

impl ExecInfo {
    /// Create a node with neutral speedup and no expressions
    pub fn new(
        sql_id: i64,
        node_id: i64,
        name: impl Into<NameRef>,
        op_type: OpType,
        is_supported: bool,
    ) -> Self {
        Self {
            sql_id,
            node_id,
            name: name.into(),
            op_type,
            description: String::new(),
            speedup_factor: 1.0,
            duration: None,
            is_supported,
            stages: BTreeSet::new(),
            expressions: None,
            unsupported_exprs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Nameless wrapper node; never aggregated, children are kept
    pub fn placeholder(sql_id: i64, node_id: i64) -> Self {
        Self::new(sql_id, node_id, NameRef::empty(), OpType::Exec, false)
    }

    pub fn with_stages(mut self, stages: impl IntoIterator<Item = i32>) -> Self {
        self.stages.extend(stages);
        self
    }

    pub fn with_expressions<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NameRef>,
    {
        self.expressions = Some(names.into_iter().map(ExprRef::new).collect());
        self
    }

    pub fn with_children(mut self, children: Vec<ExecInfo>) -> Self {
        self.children = children;
        self
    }

    pub fn with_speedup_factor(mut self, speedup_factor: f64) -> Self {
        self.speedup_factor = speedup_factor;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    /// Expressions of this node, empty when absent
    pub fn expressions(&self) -> &[ExprRef] {
        self.expressions.as_deref().unwrap_or(&[])
    }
}

impl Drop for ExecInfo {
    // Unlink the subtree onto a work-list so deep plans drop without recursing
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
