//! Read-only analysis of finished mazes.

mod distances;
mod stats;

pub use distances::{DistanceSummary, distance_histogram};
pub use stats::DegreeStats;
