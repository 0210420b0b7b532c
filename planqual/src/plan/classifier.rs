// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Classification of raw plan forests

use crate::checker::SupportChecker;
use crate::config::ParserConfig;
use crate::ops::{NameRef, OpType};
use crate::parser::ExecParserRegistry;
use crate::plan::{ExecInfo, RawPlanNode};

/// Builds classified trees by running every raw node through its parser
#[derive(Debug, Default)]
pub struct PlanClassifier {
    registry: ExecParserRegistry,
    config: ParserConfig,
}

impl PlanClassifier {
    pub fn new(registry: ExecParserRegistry, config: ParserConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &ExecParserRegistry {
        &self.registry
    }

    /// Classify every tree of a query's plan forest
    ///
    /// Trees are built bottom-up from an explicit stack; a parent is complete
    /// once all of its children have been attached.
    pub fn classify(
        &self,
        sql_id: i64,
        roots: &[RawPlanNode],
        checker: &dyn SupportChecker,
    ) -> Vec<ExecInfo> {
        let mut classified = Vec::with_capacity(roots.len());
        for root in roots {
            let mut stack: Vec<(&RawPlanNode, ExecInfo)> =
                vec![(root, self.classify_node(sql_id, root, checker))];

            // The number of attached children is the index of the next raw child
            while let Some((raw, next)) =
                stack.last().map(|(raw, info)| (*raw, info.children.len()))
            {
                if let Some(child) = raw.children.get(next) {
                    let info = self.classify_node(sql_id, child, checker);
                    stack.push((child, info));
                    continue;
                }
                if let Some((_, done)) = stack.pop() {
                    match stack.last_mut() {
                        Some((_, parent)) => parent.children.push(done),
                        None => classified.push(done),
                    }
                }
            }
        }
        classified
    }

    /// Classify one node; its children are left empty
    fn classify_node(
        &self,
        sql_id: i64,
        node: &RawPlanNode,
        checker: &dyn SupportChecker,
    ) -> ExecInfo {
        let mut info = if self.config.is_placeholder(&node.name) {
            let mut placeholder = ExecInfo::placeholder(sql_id, node.id);
            placeholder.description = node.desc.clone();
            placeholder.stages = node.stages.clone();
            placeholder
        } else {
            let parser = self.registry.parser_for(&node.name);
            match parser.parse(node, sql_id, checker, &self.config) {
                Ok(info) => info,
                Err(e) => {
                    log::warn!(
                        "Failed to parse node {} ({}) of sql {}: {}",
                        node.id,
                        node.name,
                        sql_id,
                        e
                    );
                    self.unparsed(sql_id, node)
                }
            }
        };
        info.children.clear();
        info
    }

    /// Record for a node whose description could not be parsed
    fn unparsed(&self, sql_id: i64, node: &RawPlanNode) -> ExecInfo {
        let exec_name = self.config.resolve_exec_name(&node.name);
        let mut info = ExecInfo::new(
            sql_id,
            node.id,
            NameRef::intern(&exec_name),
            OpType::for_exec_name(&node.name),
            false,
        )
        .with_stages(node.stages.iter().copied());
        info.description = node.desc.clone();
        info
    }
}
