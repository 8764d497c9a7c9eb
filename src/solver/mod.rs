//! Mode orchestration.
//!
//! The engine exposes one synchronous operation per operating mode:
//!
//! - [`solve_fixed_capacity`] — every vehicle shares one capacity; the
//!   fleet size is an implicit upper bound of one vehicle per stop.
//! - [`solve_fixed_fleet`] — the fleet size is fixed; stops are first
//!   partitioned geographically, then one route is solved per cluster.
//!
//! Both are pure functions: each call builds its own matrix and model, and
//! nothing persists afterwards, so concurrent solves never share state.

mod fixed_capacity;
mod fixed_fleet;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use fixed_capacity::solve_fixed_capacity;
pub use fixed_fleet::solve_fixed_fleet;

/// Wall-clock budget for the improvement phase of every solve.
pub const SEARCH_TIME_LIMIT: Duration = Duration::from_secs(1);

/// The outcome of a solve, ready for the presentation layers.
///
/// `routes[k]` lists stop indices in visiting order, starting at the depot
/// (index 0) with the closing depot return stripped; `distances[k]` is the
/// full depot-to-depot circuit in meters. `unserved` lists any stops no
/// vehicle could feasibly take, so callers can detect partial coverage
/// instead of silently proceeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Per-vehicle visiting order, depot first.
    pub routes: Vec<Vec<usize>>,
    /// Per-vehicle circuit distance in meters.
    pub distances: Vec<u64>,
    /// Stops left unrouted by the search.
    pub unserved: Vec<usize>,
}
