//! High-level metadata orchestration

mod reconcile;

pub use reconcile::reconcile;
