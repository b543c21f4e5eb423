//! Shared error types for dataset loading.

use std::io;
use std::path::PathBuf;

use crate::data::table::TableError;

/// Errors that can occur when loading a table.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input contains no data rows")]
    Empty,

    #[error("line {line}: expected {expected} columns, got {got}")]
    Parse {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("need at least one attribute column and one label column, got {got}")]
    Schema { got: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}
