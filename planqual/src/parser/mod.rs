// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operator parsers
//!
//! Every operator kind gets one parser implementing [`ExecParser`]. A parser
//! reads a raw node, extracts the expressions its description mentions and
//! asks the [`SupportChecker`] whether the result can run accelerated. Parsers
//! are registered by base node name; names without a dedicated parser go
//! through [`GenericExecParser`].

mod error;
mod generic;
mod window;

pub use error::ExecParseError;
pub use generic::GenericExecParser;
pub use window::{parse_window_expressions, WindowExecParser};

use crate::checker::SupportChecker;
use crate::config::ParserConfig;
use crate::plan::{ExecInfo, RawPlanNode};
use std::collections::HashMap;

/// Core trait for all operator parsers
pub trait ExecParser: Send + Sync + std::fmt::Debug {
    /// Base node name this parser handles, e.g. `Window`
    fn node_name(&self) -> &str;

    /// Classify one raw node. Children are not visited.
    fn parse(
        &self,
        node: &RawPlanNode,
        sql_id: i64,
        checker: &dyn SupportChecker,
        config: &ParserConfig,
    ) -> Result<ExecInfo, ExecParseError>;
}

/// Support flag and speedup factor for a resolved operator
///
/// A single unsupported expression makes the whole operator unsupported, in
/// which case the speedup is the neutral `1.0`.
pub fn decide_support(
    checker: &dyn SupportChecker,
    exec_name: &str,
    unsupported_exprs: &[String],
) -> (bool, f64) {
    let all_supported = checker.is_operator_supported(exec_name) && unsupported_exprs.is_empty();
    if all_supported {
        (true, checker.get_speedup_factor(exec_name))
    } else {
        (false, 1.0)
    }
}

/// Registry of operator parsers keyed by base node name
#[derive(Debug)]
pub struct ExecParserRegistry {
    parsers: HashMap<String, Box<dyn ExecParser + 'static>>,
    fallback: GenericExecParser,
}

impl ExecParserRegistry {
    /// Create a registry with the built-in parsers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(WindowExecParser::new()));
        registry
    }

    /// Create a registry where every node goes through the generic parser
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
            fallback: GenericExecParser::new(),
        }
    }

    /// Register a parser, replacing any parser for the same node name
    pub fn register(&mut self, parser: Box<dyn ExecParser + 'static>) {
        self.parsers.insert(parser.node_name().to_string(), parser);
    }

    /// Parser for a base node name
    pub fn parser_for(&self, node_name: &str) -> &dyn ExecParser {
        match self.parsers.get(node_name) {
            Some(parser) => parser.as_ref(),
            None => &self.fallback,
        }
    }

    pub fn has_parser(&self, node_name: &str) -> bool {
        self.parsers.contains_key(node_name)
    }
}

impl Default for ExecParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
