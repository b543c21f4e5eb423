//! CSV loading for categorical tables.
//!
//! A thin I/O shim in front of the induction core. The reader treats every
//! cell as a string category, names columns positionally (`att0..`, last
//! column the label), fills empty cells with the column mode, and sorts
//! rows by all columns so count-based tie-breaks downstream are
//! deterministic.

mod error;

pub use error::TableLoadError;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::data::Table;

/// Options controlling CSV interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Discard the first data-bearing row (header line) before parsing.
    pub skip_header: bool,
}

/// Load a categorical table from a CSV file.
pub fn load_csv(path: &Path, options: LoadOptions) -> Result<Table, TableLoadError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            TableLoadError::NotFound(path.to_path_buf())
        } else {
            TableLoadError::Io(err)
        }
    })?;
    parse_csv(&content, options)
}

/// Parse CSV text into a table.
///
/// Blank lines are skipped; cells are trimmed. Every row must have the
/// same number of columns as the first.
pub fn parse_csv(content: &str, options: LoadOptions) -> Result<Table, TableLoadError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut expected = 0usize;
    let mut header_pending = options.skip_header;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let cells: Vec<String> = line.split(',').map(|cell| cell.trim().to_string()).collect();
        if rows.is_empty() {
            expected = cells.len();
        } else if cells.len() != expected {
            return Err(TableLoadError::Parse {
                line: idx + 1,
                expected,
                got: cells.len(),
            });
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(TableLoadError::Empty);
    }
    if expected < 2 {
        return Err(TableLoadError::Schema { got: expected });
    }

    fill_missing(&mut rows);
    rows.sort();

    debug!(
        "loaded {} rows with {} attribute columns",
        rows.len(),
        expected - 1
    );

    Ok(Table::from_rows(rows)?)
}

/// Replace empty cells with the column's modal value.
///
/// Ties resolve to the lexicographically smallest value. A column with no
/// non-empty cells keeps the empty string as its category.
fn fill_missing(rows: &mut [Vec<String>]) {
    let width = rows.first().map(Vec::len).unwrap_or(0);

    for col in 0..width {
        let mode: Option<String> = {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for row in rows.iter() {
                let cell = row[col].as_str();
                if !cell.is_empty() {
                    *counts.entry(cell).or_default() += 1;
                }
            }
            let mut best: Option<(&str, usize)> = None;
            for (&value, &count) in &counts {
                if best.map_or(true, |(_, best_count)| count > best_count) {
                    best = Some((value, count));
                }
            }
            best.map(|(value, _)| value.to_string())
        };

        if let Some(mode) = mode {
            for row in rows.iter_mut() {
                if row[col].is_empty() {
                    row[col] = mode.clone();
                }
            }
        }
    }
}
