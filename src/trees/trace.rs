//! Deterministic line-oriented tree traces.
//!
//! A trace is a pre-order walk of a built tree: one synthetic root record,
//! then one record per edge, branches visited in stored ascending-value
//! order. The entropy on an edge record is recomputed over the root table
//! filtered by that edge's single `attribute == value` equality; the
//! recomputation is part of the output contract, never read from the child
//! node.

use std::fmt;

use crate::data::Table;
use crate::training;

use super::node::TreeNode;

/// Literal emitted for records whose node is an internal split.
pub const NO_LEAF: &str = "no_leaf";

/// The edge a trace record describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEdge {
    /// Synthetic record for the tree root.
    Root,
    /// Edge taken when `att{attr}` equals `value`.
    Test { attr: usize, value: String },
}

impl fmt::Display for TraceEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Test { attr, value } => write!(f, "att{attr}={value}"),
        }
    }
}

/// One line of a tree trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    /// 0 for the synthetic root; parent record depth + 1 otherwise.
    pub depth: u32,
    /// Which edge the record describes.
    pub edge: TraceEdge,
    /// Entropy over the root table filtered by this edge.
    pub entropy: f64,
    /// Leaf label, or `None` for internal nodes.
    pub label: Option<String>,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{:.16},{}",
            self.depth,
            self.edge,
            self.entropy,
            self.label.as_deref().unwrap_or(NO_LEAF)
        )
    }
}

/// Emit the full trace of `tree` built over `table`.
pub fn trace(tree: &TreeNode, table: &Table) -> Vec<TraceRecord> {
    let root_entropy = match tree {
        TreeNode::Split { entropy, .. } => *entropy,
        TreeNode::Leaf { .. } => 0.0,
    };
    let mut records = vec![TraceRecord {
        depth: 0,
        edge: TraceEdge::Root,
        entropy: root_entropy,
        label: tree.label().map(str::to_string),
    }];
    walk(tree, 1, table, &mut records);
    records
}

/// Render records as the final newline-separated text trace.
pub fn render(records: &[TraceRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn walk(node: &TreeNode, depth: u32, table: &Table, out: &mut Vec<TraceRecord>) {
    let TreeNode::Split { attr, branches, .. } = node else {
        return;
    };
    for branch in branches {
        let reached = table.rows_where(*attr, &branch.value);
        out.push(TraceRecord {
            depth,
            edge: TraceEdge::Test {
                attr: *attr,
                value: branch.value.clone(),
            },
            entropy: training::entropy(table, &reached),
            label: branch.child.label().map(str::to_string),
        });
        if !branch.child.is_leaf() {
            walk(&branch.child, depth + 1, table, out);
        }
    }
}
