//! Attribute selection with deterministic tie-breaking.

use std::fmt;

use crate::data::Table;

use super::entropy::{information_gain, two_way_gain};

/// Gain margin inside which two candidates are considered tied.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Gain formula used to score candidate attributes.
///
/// [`TwoWayProxy`](Self::TwoWayProxy) scores each candidate with the cheap
/// first-observed-value-vs-rest split. [`MultiWay`](Self::MultiWay) scores
/// the partition the tree will actually branch on; it can pick a different
/// winner when proxy scores tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionGain {
    /// Two-group proxy (first observed value vs rest). The default.
    #[default]
    TwoWayProxy,
    /// Gain of the full multi-way partition.
    MultiWay,
}

impl SelectionGain {
    /// Score one candidate attribute over `rows`.
    pub fn score(&self, table: &Table, rows: &[u32], attr: usize, base_entropy: f64) -> f64 {
        match self {
            Self::TwoWayProxy => two_way_gain(table, rows, attr, base_entropy),
            Self::MultiWay => information_gain(table, rows, attr, base_entropy),
        }
    }
}

impl fmt::Display for SelectionGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoWayProxy => write!(f, "TwoWayProxy"),
            Self::MultiWay => write!(f, "MultiWay"),
        }
    }
}

/// Pick the attribute to split `rows` on, or `None` if there are no
/// candidates.
///
/// Candidates are scanned in ascending index order. A candidate replaces
/// the best only when its gain exceeds it by more than [`TIE_TOLERANCE`];
/// within the tolerance the positionally smaller attribute wins. The fold
/// makes the winner independent of scan order, so the first candidate
/// always registers and a non-empty candidate set always yields a winner.
pub fn select(
    table: &Table,
    rows: &[u32],
    candidates: &[usize],
    base_entropy: f64,
    policy: SelectionGain,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for &attr in candidates {
        let gain = policy.score(table, rows, attr, base_entropy);
        best = Some(match best {
            None => (attr, gain),
            Some((best_attr, best_gain)) => {
                if gain > best_gain + TIE_TOLERANCE {
                    (attr, gain)
                } else if (gain - best_gain).abs() <= TIE_TOLERANCE {
                    (best_attr.min(attr), best_gain)
                } else {
                    (best_attr, best_gain)
                }
            }
        });
    }

    best.map(|(attr, _)| attr)
}
