//! Search parameterization.

use std::time::Duration;

/// Strategy for the constructive first-solution phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstSolutionStrategy {
    /// Greedily extends each vehicle's path by the cheapest next arc.
    PathCheapestArc,
    /// Inserts stops into whichever route grows total cost least,
    /// considered across all vehicles simultaneously.
    ParallelCheapestInsertion,
}

/// Metaheuristic for the improvement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metaheuristic {
    /// Penalty-guided diversified search; anytime, runs the full budget.
    GuidedLocalSearch,
    /// A single descent to the nearest local optimum.
    GreedyDescent,
}

/// Parameters for one search invocation.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fleet_routing::search::{FirstSolutionStrategy, Metaheuristic, SearchParams};
///
/// let params = SearchParams::default();
/// assert_eq!(params.first_solution, FirstSolutionStrategy::PathCheapestArc);
/// assert_eq!(params.metaheuristic, Metaheuristic::GuidedLocalSearch);
/// assert_eq!(params.time_limit, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Constructive heuristic for the initial assignment.
    pub first_solution: FirstSolutionStrategy,
    /// Improvement metaheuristic.
    pub metaheuristic: Metaheuristic,
    /// Wall-clock budget for the improvement phase.
    pub time_limit: Duration,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            first_solution: FirstSolutionStrategy::PathCheapestArc,
            metaheuristic: Metaheuristic::GuidedLocalSearch,
            time_limit: Duration::from_secs(1),
        }
    }
}
