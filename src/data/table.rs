//! The categorical table model.
//!
//! This is the canonical in-memory input for tree induction: `k` attribute
//! columns of string categories plus one class-label column, stored
//! column-major. The table is immutable once built; subsets are row index
//! sets over a single table.

use std::collections::{BTreeMap, BTreeSet};

/// Table construction/validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    #[error("row {row} has {got} columns, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("a table needs one attribute column and one label column, got {got}")]
    TooFewColumns { got: usize },
}

/// An immutable categorical table.
///
/// The last column of the source rows is the class label; the remaining
/// columns are nominal attributes addressed by position and rendered as
/// `att0..att(k-1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Attribute columns, column-major.
    attrs: Vec<Vec<String>>,
    /// Class label per row.
    labels: Vec<String>,
}

impl Table {
    /// Build a table from rows of `k + 1` cells (attributes, then label).
    ///
    /// All rows must have the same length, and at least two columns.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if !rows.is_empty() && width < 2 {
            return Err(TableError::TooFewColumns { got: width });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(TableError::RowLengthMismatch {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
        }

        let n_attrs = width.saturating_sub(1);
        let mut attrs = vec![Vec::with_capacity(rows.len()); n_attrs];
        let mut labels = Vec::with_capacity(rows.len());
        for mut cells in rows {
            if let Some(label) = cells.pop() {
                for (col, cell) in attrs.iter_mut().zip(cells) {
                    col.push(cell);
                }
                labels.push(label);
            }
        }

        Ok(Self { attrs, labels })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Number of attribute columns (excludes the label column).
    pub fn n_attrs(&self) -> usize {
        self.attrs.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display name of an attribute column.
    pub fn attr_name(attr: usize) -> String {
        format!("att{attr}")
    }

    /// Attribute cell at (`row`, `attr`).
    #[inline]
    pub fn attr_value(&self, row: u32, attr: usize) -> &str {
        &self.attrs[attr][row as usize]
    }

    /// Class label of `row`.
    #[inline]
    pub fn label(&self, row: u32) -> &str {
        &self.labels[row as usize]
    }

    /// Index set covering every row.
    pub fn all_rows(&self) -> Vec<u32> {
        (0..self.n_rows() as u32).collect()
    }

    /// All attribute indices, ascending.
    pub fn attr_indices(&self) -> Vec<usize> {
        (0..self.n_attrs()).collect()
    }

    /// Class-label counts over `rows`, keyed in ascending label order.
    pub fn class_counts(&self, rows: &[u32]) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for &row in rows {
            *counts.entry(self.label(row)).or_default() += 1;
        }
        counts
    }

    /// Distinct values of `attr` observed in `rows`, ascending.
    pub fn distinct_values(&self, attr: usize, rows: &[u32]) -> Vec<&str> {
        let values: BTreeSet<&str> = rows.iter().map(|&row| self.attr_value(row, attr)).collect();
        values.into_iter().collect()
    }

    /// Rows of the subset where `attr == value`, preserving order.
    pub fn filter(&self, rows: &[u32], attr: usize, value: &str) -> Vec<u32> {
        rows.iter()
            .copied()
            .filter(|&row| self.attr_value(row, attr) == value)
            .collect()
    }

    /// Rows of the whole table where `attr == value`.
    ///
    /// Trace records are scored over these subsets, never over the subset
    /// that actually reached the node.
    pub fn rows_where(&self, attr: usize, value: &str) -> Vec<u32> {
        self.filter(&self.all_rows(), attr, value)
    }
}
