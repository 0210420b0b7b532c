//! Plan fixtures for aggregation and parser tests

use planqual::{ExecInfo, OpType, OperatorSupportTable, RawPlanNode};

/// Route `log` output through the test harness; safe to call repeatedly
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Support table where windowing and sorting run accelerated
pub fn support_table() -> OperatorSupportTable {
    OperatorSupportTable::new()
        .with_operator("WindowExec", 2.5)
        .with_operator("SortExec", 3.0)
        .with_operator("ProjectExec", 1.8)
        .with_expression("avg")
        .with_expression("sum")
        .with_expression("rank")
        .with_expression("row_number")
}

/// Raw window node for the query-7 scenario
pub fn raw_window(id: i64, stages: &[i32]) -> RawPlanNode {
    RawPlanNode::new(id, "Window", "Window avg(x) over (partition by y)")
        .with_stages(stages.iter().copied())
}

/// Classified node with the given expressions and stages
pub fn exec(
    sql_id: i64,
    node_id: i64,
    name: &str,
    is_supported: bool,
    stages: &[i32],
    exprs: &[&str],
) -> ExecInfo {
    let node = ExecInfo::new(sql_id, node_id, name, OpType::Exec, is_supported)
        .with_stages(stages.iter().copied());
    if exprs.is_empty() {
        node
    } else {
        node.with_expressions(exprs.iter().copied())
    }
}

/// Mirror a forest: reverse siblings at every level
pub fn mirrored(roots: &[ExecInfo]) -> Vec<ExecInfo> {
    roots
        .iter()
        .rev()
        .map(|node| {
            let mut copy = node.clone();
            copy.children = mirrored(&node.children);
            copy
        })
        .collect()
}

/// Rotate siblings left by one at every level
pub fn rotated(roots: &[ExecInfo]) -> Vec<ExecInfo> {
    let mut out: Vec<ExecInfo> = roots
        .iter()
        .map(|node| {
            let mut copy = node.clone();
            copy.children = rotated(&node.children);
            copy
        })
        .collect();
    if !out.is_empty() {
        out.rotate_left(1);
    }
    out
}

/// A mixed plan for query `sql_id` exercising nesting, repeats and placeholders
pub fn mixed_plan(sql_id: i64) -> Vec<ExecInfo> {
    vec![
        exec(sql_id, 1, "SortExec", true, &[1], &[]).with_children(vec![
            exec(sql_id, 2, "WindowExec", true, &[1, 2], &["avg", "rank"]),
            ExecInfo::placeholder(sql_id, 3).with_children(vec![
                exec(sql_id, 4, "WindowExec", true, &[3], &["avg"]),
                exec(sql_id, 5, "WindowExec", false, &[3], &["percent_rank"]),
            ]),
            exec(sql_id, 6, "ProjectExec", true, &[2], &["upper"]),
        ]),
        exec(sql_id, 7, "SortExec", true, &[4], &[]),
    ]
}
