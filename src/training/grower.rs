//! Recursive tree growth.

use derive_builder::Builder;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use crate::data::Table;
use crate::trees::{Branch, TreeNode};

use super::entropy::entropy;
use super::selector::{select, SelectionGain};

/// Grows classification trees over categorical tables.
///
/// A grower is cheap to construct and reusable; every [`grow`](Self::grow)
/// call seeds its own RNG, so repeated calls with the same configuration
/// produce identical trees.
///
/// Configure via the builder:
///
/// ```
/// use arbor::training::TreeGrower;
///
/// let grower = TreeGrower::builder()
///     .max_depth(4u32)
///     .seed(7u64)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), default)]
pub struct TreeGrower {
    /// Maximum number of splits along any root-to-leaf path.
    #[builder(default = "6")]
    max_depth: u32,
    /// Seed for the modal-label RNG, applied once per grow call.
    #[builder(default = "0")]
    seed: u64,
    /// Gain formula used to score candidate attributes.
    #[builder(default)]
    selection: SelectionGain,
}

impl Default for TreeGrower {
    fn default() -> Self {
        Self {
            max_depth: 6,
            seed: 0,
            selection: SelectionGain::default(),
        }
    }
}

impl TreeGrower {
    /// Create a builder for configuring a grower.
    pub fn builder() -> TreeGrowerBuilder {
        TreeGrowerBuilder::default()
    }

    /// Grow a tree over the whole table.
    ///
    /// # Panics
    /// Panics if the table has no rows; loaders reject empty input before
    /// this point.
    pub fn grow(&self, table: &Table) -> TreeNode {
        assert!(
            !table.is_empty(),
            "cannot grow a tree over an empty table"
        );

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        let rows = table.all_rows();
        let candidates = table.attr_indices();
        self.grow_node(table, &rows, &candidates, 0, &mut rng)
    }

    fn grow_node(
        &self,
        table: &Table,
        rows: &[u32],
        candidates: &[usize],
        depth: u32,
        rng: &mut Xoshiro256PlusPlus,
    ) -> TreeNode {
        let node_entropy = entropy(table, rows);
        if node_entropy == 0.0 {
            return TreeNode::leaf(table.label(rows[0]));
        }

        if candidates.is_empty() || depth >= self.max_depth {
            return TreeNode::leaf(modal_label(table, rows, rng));
        }

        let Some(attr) = select(table, rows, candidates, node_entropy, self.selection) else {
            return TreeNode::leaf(modal_label(table, rows, rng));
        };

        let mut branches = Vec::new();
        for value in table.distinct_values(attr, rows) {
            let group = table.filter(rows, attr, value);
            let child = self.branch_child(table, rows, &group, attr, candidates, depth, rng);
            branches.push(Branch {
                value: value.to_string(),
                child,
            });
        }
        debug!(
            "depth {depth}: split on att{attr} into {} branches",
            branches.len()
        );

        TreeNode::Split {
            attr,
            entropy: node_entropy,
            branches,
        }
    }

    /// Resolve the child reached through one branch group.
    ///
    /// An empty group resolves to a leaf with one of the parent subset's
    /// modal labels; a pure group short-circuits to a leaf without a
    /// recursive call.
    fn branch_child(
        &self,
        table: &Table,
        parent_rows: &[u32],
        group: &[u32],
        attr: usize,
        candidates: &[usize],
        depth: u32,
        rng: &mut Xoshiro256PlusPlus,
    ) -> TreeNode {
        if group.is_empty() {
            return TreeNode::leaf(modal_label(table, parent_rows, rng));
        }
        if entropy(table, group) == 0.0 {
            return TreeNode::leaf(table.label(group[0]));
        }

        let remaining: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&candidate| candidate != attr)
            .collect();
        self.grow_node(table, group, &remaining, depth + 1, rng)
    }
}

/// Draw one of the most frequent labels in `rows`, uniformly among ties.
fn modal_label(table: &Table, rows: &[u32], rng: &mut Xoshiro256PlusPlus) -> String {
    let counts = table.class_counts(rows);
    let max = counts.values().copied().max().unwrap_or(0);
    let modes: Vec<&str> = counts
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&label, _)| label)
        .collect();
    debug_assert!(!modes.is_empty(), "modal label of an empty subset");

    modes[rng.gen_range(0..modes.len())].to_string()
}
