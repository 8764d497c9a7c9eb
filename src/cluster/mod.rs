//! Geographic pre-partitioning for the fixed-fleet operating mode.
//!
//! Groups non-depot stops into a target number of clusters by coordinate
//! proximity, each group prefixed with the depot and carrying an explicit
//! mapping back to the original stop indexing.

mod partition;

pub use partition::{partition, Cluster};
