//! Testing utilities for arbor.
//!
//! Shared assertion helpers and fixtures used by both unit tests and
//! integration tests:
//!
//! ```ignore
//! use arbor::testing::{table_of, DEFAULT_TOLERANCE};
//! use arbor::assert_approx_eq_f64;
//! ```

use crate::data::Table;

/// Default tolerance for f64 comparisons in tests.
///
/// Entropies are O(1) and computed in a handful of operations, so this is
/// far looser than the error any test value accumulates.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq_f64 {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if diff > tol {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if diff > tol {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Build a table from string-slice rows (attributes, then label).
///
/// # Panics
/// Panics on ragged or too-narrow input; intended for test fixtures only.
pub fn table_of(rows: &[&[&str]]) -> Table {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Table::from_rows(rows).expect("fixture rows must be rectangular")
}
