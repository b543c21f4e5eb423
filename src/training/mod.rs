//! Tree induction core.
//!
//! - [`entropy`] / [`information_gain`] / [`two_way_gain`]: impurity and
//!   gain scoring with the base-`C` normalization
//! - [`select`] + [`SelectionGain`]: deterministic attribute selection
//! - [`TreeGrower`]: recursive growth with a seeded modal-label RNG

mod entropy;
mod grower;
mod selector;

pub use entropy::{entropy, information_gain, two_way_gain};
pub use grower::{TreeGrower, TreeGrowerBuilder, TreeGrowerBuilderError};
pub use selector::{select, SelectionGain, TIE_TOLERANCE};
