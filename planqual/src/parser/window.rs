// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for windowing operators
//!
//! A window node's description lists its window expressions first, then the
//! partition and order specs:
//!
//! ```text
//! Window [sum(cast(v#30 as bigint)) windowspecdefinition(k#29, ...) AS s#35L], [k#29], [o#28 ASC]
//! ```
//!
//! Only function names are extracted. Window-spec helpers and configured
//! wrapper functions such as `cast` are not reported as expressions.

use super::{decide_support, ExecParseError, ExecParser};
use crate::checker::SupportChecker;
use crate::config::ParserConfig;
use crate::ops::{NameRef, OpType};
use crate::plan::{ExecInfo, ExprRef, RawPlanNode};
use once_cell::sync::Lazy;
use regex::Regex;

const WINDOW_NODE_NAME: &str = "Window";
const WINDOW_PREFIX: &str = "Window ";

/// Helper functions that make up a window spec rather than computing a value
const WINDOW_SPEC_FUNCTIONS: &[&str] = &[
    "windowspecdefinition",
    "specifiedwindowframe",
    "unboundedpreceding",
    "unboundedfollowing",
    "currentrow",
];

static FUNCTION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\$?\(").expect("function call pattern"));

/// Parser for `Window` nodes
#[derive(Debug, Default)]
pub struct WindowExecParser;

impl WindowExecParser {
    pub fn new() -> Self {
        Self
    }
}

impl ExecParser for WindowExecParser {
    fn node_name(&self) -> &str {
        WINDOW_NODE_NAME
    }

    fn parse(
        &self,
        node: &RawPlanNode,
        sql_id: i64,
        checker: &dyn SupportChecker,
        config: &ParserConfig,
    ) -> Result<ExecInfo, ExecParseError> {
        let exec_name = config.resolve_exec_name(&node.name);
        let expr_str = node.desc.replacen(WINDOW_PREFIX, "", 1);
        let expressions = parse_window_expressions(&expr_str, &exec_name, config)?;

        let unsupported = checker.get_unsupported_expressions(&expressions);
        let (is_supported, speedup_factor) = decide_support(checker, &exec_name, &unsupported);

        log::debug!(
            "WINDOW PARSER: sql {} node {} -> {} expressions={:?} unsupported={:?}",
            sql_id,
            node.id,
            exec_name,
            expressions,
            unsupported
        );

        Ok(ExecInfo {
            sql_id,
            node_id: node.id,
            name: NameRef::intern(&exec_name),
            op_type: OpType::Exec,
            description: node.desc.clone(),
            speedup_factor,
            // Window operators never report a duration
            duration: None,
            is_supported,
            stages: node.stages.clone(),
            expressions: Some(expressions.iter().map(|e| ExprRef::new(e.as_str())).collect()),
            unsupported_exprs: unsupported.iter().map(|e| NameRef::intern(e)).collect(),
            children: Vec::new(),
        })
    }
}

/// Extract window function names from a window description
///
/// The input is the description with its `Window ` prefix removed; `operator`
/// names the node in errors. Names are returned once each in order of first
/// appearance.
pub fn parse_window_expressions(
    expr_str: &str,
    operator: &str,
    config: &ParserConfig,
) -> Result<Vec<String>, ExecParseError> {
    if !is_balanced(expr_str) {
        return Err(ExecParseError::UnbalancedDelimiters {
            operator: operator.to_string(),
            description: expr_str.to_string(),
        });
    }

    let trimmed = expr_str.trim();
    let window_exprs = if trimmed.starts_with('[') {
        first_bracket_group(trimmed)
    } else {
        trimmed
    };

    let mut names: Vec<String> = Vec::new();
    for caps in FUNCTION_CALL.captures_iter(window_exprs) {
        let name = &caps[1];
        let lowered = name.to_ascii_lowercase();
        if WINDOW_SPEC_FUNCTIONS.contains(&lowered.as_str()) || config.is_ignored_expression(name)
        {
            continue;
        }
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Contents of the leading `[...]` group, brackets excluded
fn first_bracket_group(s: &str) -> &str {
    let mut depth = 0usize;
    for (idx, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return &s[1..idx];
                }
            }
            _ => {}
        }
    }
    &s[1..]
}

fn is_balanced(s: &str) -> bool {
    let mut open: Vec<char> = Vec::new();
    for ch in s.chars() {
        match ch {
            '(' | '[' => open.push(ch),
            ')' | ']' => {
                let expected = if ch == ')' { '(' } else { '[' };
                if open.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::OperatorSupportTable;

    fn window_node(desc: &str) -> RawPlanNode {
        RawPlanNode::new(12, "Window", desc).with_stages([1, 2])
    }

    #[test]
    fn test_parse_simple_window_expression() {
        let config = ParserConfig::default();
        let names = parse_window_expressions("avg(x) over (partition by y)", "WindowExec", &config).unwrap();
        assert_eq!(names, vec!["avg".to_string()]);
    }

    #[test]
    fn test_parse_spark_window_description() {
        let config = ParserConfig::default();
        let desc = "[sum(cast(level#30 as bigint)) windowspecdefinition(device#29, id#28 ASC NULLS FIRST, \
                    specifiedwindowframe(RangeFrame, unboundedpreceding$(), currentrow$())) AS sum#35L, \
                    row_number() windowspecdefinition(device#29, id#28 ASC NULLS FIRST, \
                    specifiedwindowframe(RowFrame, unboundedpreceding$(), currentrow$())) AS row_number#41, \
                    sum(level#30) windowspecdefinition(device#29) AS s2#42], [device#29], [id#28 ASC NULLS FIRST]";
        let names = parse_window_expressions(desc, "WindowExec", &config).unwrap();
        assert_eq!(names, vec!["sum".to_string(), "row_number".to_string()]);
    }

    #[test]
    fn test_only_first_bracket_group_is_scanned() {
        let config = ParserConfig::default();
        let names = parse_window_expressions("[rank()], [upper(k#1)], [o#2 ASC]", "WindowExec", &config).unwrap();
        assert_eq!(names, vec!["rank".to_string()]);
    }

    #[test]
    fn test_unbalanced_description_is_an_error() {
        let config = ParserConfig::default();
        let err = parse_window_expressions("[avg(x]", "WindowExec", &config).unwrap_err();
        assert!(matches!(err, ExecParseError::UnbalancedDelimiters { .. }));
        assert!(parse_window_expressions("avg(x))", "WindowExec", &config).is_err());
    }

    #[test]
    fn test_unbalanced_error_names_resolved_operator() {
        let checker = OperatorSupportTable::new();
        let err = WindowExecParser::new()
            .parse(&window_node("Window [avg(x]"), 1, &checker, &ParserConfig::default())
            .unwrap_err();

        match err {
            ExecParseError::UnbalancedDelimiters {
                operator,
                description,
            } => {
                assert_eq!(operator, "WindowExec");
                assert_eq!(description, "[avg(x]");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_window_parser_supported() {
        let checker = OperatorSupportTable::new()
            .with_operator("WindowExec", 2.5)
            .with_expression("avg");
        let info = WindowExecParser::new()
            .parse(
                &window_node("Window avg(x) over (partition by y)"),
                7,
                &checker,
                &ParserConfig::default(),
            )
            .unwrap();

        assert_eq!(info.name.as_str(), "WindowExec");
        assert_eq!(info.sql_id, 7);
        assert!(info.is_supported);
        assert_eq!(info.speedup_factor, 2.5);
        assert!(info.unsupported_exprs.is_empty());
        assert_eq!(info.expressions().len(), 1);
        assert_eq!(info.expressions()[0].name.as_str(), "avg");
        assert_eq!(info.stages.len(), 2);
    }

    #[test]
    fn test_window_parser_unsupported_expression_vetoes_operator() {
        let checker = OperatorSupportTable::new()
            .with_operator("WindowExec", 2.5)
            .with_expression("avg");
        let info = WindowExecParser::new()
            .parse(
                &window_node("Window [avg(x#1) windowspecdefinition(y#2) AS a#3, percent_rank() windowspecdefinition(y#2) AS p#4]"),
                7,
                &checker,
                &ParserConfig::default(),
            )
            .unwrap();

        assert!(!info.is_supported);
        assert_eq!(info.speedup_factor, 1.0);
        assert_eq!(info.unsupported_exprs, vec![NameRef::intern("percent_rank")]);
    }

    #[test]
    fn test_window_parser_never_reports_duration() {
        let checker = OperatorSupportTable::new();
        let parser = WindowExecParser::new();
        for desc in ["Window avg(x)", "Window ", "", "[rank()]"] {
            let info = parser
                .parse(&window_node(desc), 1, &checker, &ParserConfig::default())
                .unwrap();
            assert_eq!(info.duration, None);
        }
    }

    #[test]
    fn test_window_prefix_stripped_once() {
        let config = ParserConfig::default();
        let checker = OperatorSupportTable::new();
        let info = WindowExecParser::new()
            .parse(&window_node("Window Window(x)"), 1, &checker, &config)
            .unwrap();
        assert_eq!(info.expressions()[0].name.as_str(), "Window");
    }
}
