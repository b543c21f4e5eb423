//! arbor: entropy-driven decision-tree induction for categorical tables.
//!
//! This crate grows an ID3-style classification tree over a small, fully
//! categorical table and renders the result as a deterministic,
//! line-oriented trace. [`data`] holds the table model and the CSV shim,
//! [`training`] the induction core, and [`trees`] the built structure and
//! its trace.

pub mod data;
pub mod testing;
pub mod training;
pub mod trees;
