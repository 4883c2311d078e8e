//! Atomic operations for game metadata detection

mod apply_candidate;

pub use apply_candidate::apply_candidate;
