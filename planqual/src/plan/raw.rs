// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Raw plan nodes as reported by the query engine

use crate::parser::ExecParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One node of an engine plan graph, before classification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlanNode {
    /// Node id within its query plan
    pub id: i64,
    /// Base operator name, e.g. `Window`
    pub name: String,
    /// Free-text description, e.g. `Window [avg(x) ...]`
    #[serde(default)]
    pub desc: String,
    /// Stages this node ran in
    #[serde(default)]
    pub stages: BTreeSet<i32>,
    #[serde(default)]
    pub children: Vec<RawPlanNode>,
}

impl RawPlanNode {
    pub fn new(id: i64, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            desc: desc.into(),
            stages: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn with_stages(mut self, stages: impl IntoIterator<Item = i32>) -> Self {
        self.stages.extend(stages);
        self
    }

    pub fn with_child(mut self, child: RawPlanNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a JSON array of root nodes
    pub fn forest_from_json(json: &str) -> Result<Vec<RawPlanNode>, ExecParseError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Drop for RawPlanNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
