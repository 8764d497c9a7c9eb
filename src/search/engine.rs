//! Two-phase search: construction, then time-boxed improvement.

use std::time::Instant;

use tracing::debug;

use crate::constructive::{parallel_cheapest_insertion, path_cheapest_arc};
use crate::gls;
use crate::local_search::descend;
use crate::models::{Assignment, RoutingModel};

use super::{FirstSolutionStrategy, Metaheuristic, SearchParams};

/// Searches the model for a feasible assignment.
///
/// The constructive phase builds an initial assignment; stops it cannot
/// place end up unrouted rather than failing the solve. The improvement
/// phase then runs under the wall-clock budget and always hands back the
/// best assignment seen, never blocking past the deadline.
///
/// Returns `None` only when there were stops to serve and construction
/// placed none of them, meaning no vehicle could feasibly leave the depot.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::models::{RoutingModel, Stop, Vehicle};
/// use fleet_routing::search::{self, SearchParams};
///
/// let stops = vec![
///     Stop::depot(-34.60, -58.38),
///     Stop::new(1, -34.61, -58.38, 1),
///     Stop::new(2, -34.62, -58.38, 1),
/// ];
/// let locations: Vec<_> = stops.iter().map(|s| s.location()).collect();
/// let distances = DistanceMatrix::from_locations(&locations).unwrap();
/// let model = RoutingModel::build(stops, vec![Vehicle::new(0, 5)], distances).unwrap();
///
/// let params = SearchParams {
///     time_limit: Duration::from_millis(50),
///     ..SearchParams::default()
/// };
/// let assignment = search::solve(&model, &params).expect("feasible");
/// assert_eq!(assignment.num_served(), 2);
/// ```
pub fn solve(model: &RoutingModel, params: &SearchParams) -> Option<Assignment> {
    let deadline = Instant::now() + params.time_limit;

    let initial = match params.first_solution {
        FirstSolutionStrategy::PathCheapestArc => path_cheapest_arc(model),
        FirstSolutionStrategy::ParallelCheapestInsertion => parallel_cheapest_insertion(model),
    };
    debug!(
        served = initial.num_served(),
        unrouted = initial.unrouted().len(),
        "construction finished"
    );

    if model.num_stops() > 0 && initial.num_served() == 0 {
        return None;
    }

    let improved = match params.metaheuristic {
        Metaheuristic::GuidedLocalSearch => gls::improve(model, initial, deadline),
        Metaheuristic::GreedyDescent => {
            let (mut sequences, unrouted) = initial.into_parts();
            descend(&mut sequences, model, model.distances(), deadline);
            Assignment::new(sequences, unrouted)
        }
    };

    Some(improved)
}
