//! Pure functions for game metadata
//!
//! These functions have no side effects and are deterministic.

mod candidates;
mod executables;
mod fields;
mod merge;

pub use candidates::builtin_candidate_groups;
pub use executables::executable_pair;
pub use fields::FIELDS;
pub use merge::{diff, merge};
