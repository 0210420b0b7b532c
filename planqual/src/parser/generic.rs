// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Fallback parser for operators without a dedicated parser

use super::{decide_support, ExecParseError, ExecParser};
use crate::checker::SupportChecker;
use crate::config::ParserConfig;
use crate::ops::{NameRef, OpType};
use crate::plan::{ExecInfo, RawPlanNode};

/// Classifies a node by its name alone; no expressions are extracted
#[derive(Debug, Default)]
pub struct GenericExecParser;

impl GenericExecParser {
    pub fn new() -> Self {
        Self
    }
}

impl ExecParser for GenericExecParser {
    fn node_name(&self) -> &str {
        ""
    }

    fn parse(
        &self,
        node: &RawPlanNode,
        sql_id: i64,
        checker: &dyn SupportChecker,
        config: &ParserConfig,
    ) -> Result<ExecInfo, ExecParseError> {
        let exec_name = config.resolve_exec_name(&node.name);
        let (is_supported, speedup_factor) = decide_support(checker, &exec_name, &[]);

        let mut info = ExecInfo::new(
            sql_id,
            node.id,
            NameRef::intern(&exec_name),
            OpType::for_exec_name(&node.name),
            is_supported,
        )
        .with_speedup_factor(speedup_factor)
        .with_stages(node.stages.iter().copied());
        info.description = node.desc.clone();
        Ok(info)
    }
}
