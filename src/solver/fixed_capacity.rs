//! Fixed-capacity operating mode.

use tracing::info;

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::evaluation::RouteExtractor;
use crate::models::{RoutingModel, Stop, Vehicle};
use crate::search::{self, FirstSolutionStrategy, Metaheuristic, SearchParams};

use super::{SolveResult, SEARCH_TIME_LIMIT};

/// Routes all stops under a shared per-vehicle capacity.
///
/// `locations[0]` is the depot; every other location is a stop demanding
/// `demand_per_stop` load units (the conventional default is 1). The model
/// gets one candidate vehicle per stop, a deliberately generous bound;
/// minimization leaves the surplus unused, and their routes come back as
/// `[0]` with distance 0.
///
/// # Errors
///
/// - [`RoutingError::NoLocations`] / [`RoutingError::CoordinateOutOfRange`]
///   / [`RoutingError::ZeroCapacity`] on invalid input.
/// - [`RoutingError::NoVehicles`] when only the depot was given.
/// - [`RoutingError::UnservableStop`] when `demand_per_stop > capacity`.
/// - [`RoutingError::NoFeasibleSolution`] when the search cannot place any
///   stop within the budget.
///
/// # Examples
///
/// ```
/// use fleet_routing::solver::solve_fixed_capacity;
///
/// let locations = vec![
///     (-34.600, -58.380),
///     (-34.610, -58.380),
///     (-34.620, -58.380),
/// ];
/// let result = solve_fixed_capacity(&locations, 10, 1).unwrap();
/// assert_eq!(result.routes.len(), 2);
/// assert!(result.unserved.is_empty());
/// ```
pub fn solve_fixed_capacity(
    locations: &[(f64, f64)],
    capacity: u32,
    demand_per_stop: u32,
) -> Result<SolveResult, RoutingError> {
    if locations.is_empty() {
        return Err(RoutingError::NoLocations);
    }
    if capacity == 0 {
        return Err(RoutingError::ZeroCapacity);
    }

    info!(
        stops = locations.len() - 1,
        capacity, "solving fixed-capacity routing"
    );

    let distances = DistanceMatrix::from_locations(locations)?;
    let stops: Vec<Stop> = locations
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| {
            if i == 0 {
                Stop::depot(lat, lon)
            } else {
                Stop::new(i, lat, lon, demand_per_stop)
            }
        })
        .collect();
    let vehicles: Vec<Vehicle> = (0..locations.len() - 1)
        .map(|id| Vehicle::new(id, capacity))
        .collect();
    let model = RoutingModel::build(stops, vehicles, distances)?;

    let params = SearchParams {
        first_solution: FirstSolutionStrategy::PathCheapestArc,
        metaheuristic: Metaheuristic::GuidedLocalSearch,
        time_limit: SEARCH_TIME_LIMIT,
    };
    let assignment = search::solve(&model, &params).ok_or(RoutingError::NoFeasibleSolution)?;

    let routes = RouteExtractor::new(&model).extract(&assignment);
    Ok(SolveResult {
        routes: routes.iter().map(|r| r.stops().to_vec()).collect(),
        distances: routes.iter().map(|r| r.total_distance()).collect(),
        unserved: assignment.unrouted().to_vec(),
    })
}
