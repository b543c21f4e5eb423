//! Tree structure and trace rendering.

pub mod node;
pub mod trace;

pub use node::{Branch, TreeNode};
pub use trace::{render, trace, TraceEdge, TraceRecord, NO_LEAF};
