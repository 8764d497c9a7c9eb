//! Fixed-fleet operating mode.

use tracing::{debug, info};

use crate::cluster::{self, Cluster};
use crate::distance::{is_valid_coordinate, DistanceMatrix};
use crate::error::RoutingError;
use crate::evaluation::RouteExtractor;
use crate::models::{RoutingModel, Stop, Vehicle};
use crate::search::{self, FirstSolutionStrategy, Metaheuristic, SearchParams};

use super::{SolveResult, SEARCH_TIME_LIMIT};

/// Routes all stops with a fixed number of vehicles.
///
/// Stops are first partitioned into `vehicle_count` geographic clusters;
/// each non-empty cluster becomes an independent single-vehicle
/// sub-problem solved on its own matrix, and the resulting local indices
/// are remapped to the caller's indexing before aggregation. A cluster the
/// partitioner left empty, or whose sub-solve found nothing, contributes
/// no route, so the result may hold fewer routes than `vehicle_count`.
///
/// # Errors
///
/// [`RoutingError::NoLocations`], [`RoutingError::ZeroFleetSize`], or
/// [`RoutingError::CoordinateOutOfRange`] on invalid input. Per-cluster
/// search failure is not an error.
///
/// # Examples
///
/// ```
/// use fleet_routing::solver::solve_fixed_fleet;
///
/// let locations = vec![
///     (-33.0, -61.0),
///     (-34.6037, -58.3816),
///     (-34.6158, -58.4333),
/// ];
/// let result = solve_fixed_fleet(&locations, 1).unwrap();
/// assert_eq!(result.routes.len(), 1);
/// assert_eq!(result.routes[0][0], 0);
/// ```
pub fn solve_fixed_fleet(
    locations: &[(f64, f64)],
    vehicle_count: usize,
) -> Result<SolveResult, RoutingError> {
    if locations.is_empty() {
        return Err(RoutingError::NoLocations);
    }
    if vehicle_count == 0 {
        return Err(RoutingError::ZeroFleetSize);
    }
    for (index, &(lat, lon)) in locations.iter().enumerate() {
        if !is_valid_coordinate(lat, lon) {
            return Err(RoutingError::CoordinateOutOfRange { index, lat, lon });
        }
    }

    info!(
        stops = locations.len() - 1,
        vehicle_count, "solving fixed-fleet routing"
    );

    let stops: Vec<Stop> = locations
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| {
            if i == 0 {
                Stop::depot(lat, lon)
            } else {
                Stop::new(i, lat, lon, 1)
            }
        })
        .collect();
    let clusters = cluster::partition(&stops, vehicle_count)?;

    let mut result = SolveResult {
        routes: Vec::new(),
        distances: Vec::new(),
        unserved: Vec::new(),
    };
    for cluster in clusters.iter().filter(|c| !c.is_empty()) {
        solve_cluster(cluster, &mut result)?;
    }
    Ok(result)
}

/// Solves one cluster as a single-vehicle tour and appends its remapped
/// routes to the aggregate result.
fn solve_cluster(cluster: &Cluster, result: &mut SolveResult) -> Result<(), RoutingError> {
    let locations: Vec<(f64, f64)> = cluster.stops().iter().map(Stop::location).collect();
    let distances = DistanceMatrix::from_locations(&locations)?;

    // A lone vehicle sized to the whole cluster: the capacity bound stays
    // inactive, leaving a pure shortest-circuit search.
    let vehicle = Vehicle::new(0, cluster.num_members() as u32);
    let model = RoutingModel::build(cluster.stops().to_vec(), vec![vehicle], distances)?;

    let params = SearchParams {
        first_solution: FirstSolutionStrategy::ParallelCheapestInsertion,
        metaheuristic: Metaheuristic::GuidedLocalSearch,
        time_limit: SEARCH_TIME_LIMIT,
    };
    let Some(assignment) = search::solve(&model, &params) else {
        debug!(members = cluster.num_members(), "cluster solve infeasible");
        return Ok(());
    };

    for route in RouteExtractor::new(&model).extract(&assignment) {
        result.routes.push(
            route
                .stops()
                .iter()
                .map(|&local| cluster.original_index(local))
                .collect(),
        );
        result.distances.push(route.total_distance());
    }
    result.unserved.extend(
        assignment
            .unrouted()
            .iter()
            .map(|&local| cluster.original_index(local)),
    );
    Ok(())
}
