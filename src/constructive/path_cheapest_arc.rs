//! Path-cheapest-arc constructive heuristic.
//!
//! # Algorithm
//!
//! One vehicle at a time, starting from the depot, always extends the
//! partial path by the cheapest arc to an unvisited stop that still fits
//! the remaining capacity. When no stop fits, the route is closed and the
//! next vehicle starts. Stops no vehicle could take are left unrouted.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::models::{Assignment, RoutingModel};

/// Builds an initial assignment by greedy cheapest-arc extension.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::path_cheapest_arc;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::models::{RoutingModel, Stop, Vehicle};
///
/// let stops = vec![
///     Stop::depot(-34.60, -58.38),
///     Stop::new(1, -34.61, -58.38, 1),
///     Stop::new(2, -34.62, -58.38, 1),
/// ];
/// let locations: Vec<_> = stops.iter().map(|s| s.location()).collect();
/// let distances = DistanceMatrix::from_locations(&locations).unwrap();
/// let vehicles = vec![Vehicle::new(0, 10), Vehicle::new(1, 10)];
/// let model = RoutingModel::build(stops, vehicles, distances).unwrap();
///
/// let assignment = path_cheapest_arc(&model);
/// assert_eq!(assignment.num_served(), 2);
/// assert!(assignment.unrouted().is_empty());
/// ```
pub fn path_cheapest_arc(model: &RoutingModel) -> Assignment {
    let n = model.stops().len();
    let depot = model.depot();

    let mut visited = vec![false; n];
    visited[depot] = true;

    let mut sequences: Vec<Vec<usize>> = vec![Vec::new(); model.num_vehicles()];

    for (vehicle, sequence) in sequences.iter_mut().enumerate() {
        let capacity = model.capacity(vehicle);
        let mut current = depot;
        let mut load: u32 = 0;

        loop {
            let mut best: Option<(usize, u64)> = None;
            for stop in 1..n {
                if visited[stop] || load + model.demand(stop) > capacity {
                    continue;
                }
                let arc = model.distance(current, stop);
                if best.is_none() || arc < best.expect("checked is_none").1 {
                    best = Some((stop, arc));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    sequence.push(next);
                    load += model.demand(next);
                    current = next;
                }
                None => break,
            }
        }

        if visited.iter().skip(1).all(|&v| v) {
            break;
        }
    }

    let unrouted: Vec<usize> = (1..n).filter(|&stop| !visited[stop]).collect();
    Assignment::new(sequences, unrouted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Stop, Vehicle};

    fn line_model(capacities: &[u32]) -> RoutingModel {
        // Depot and three stops heading due south, ~1.1km apart.
        let stops = vec![
            Stop::depot(-34.60, -58.38),
            Stop::new(1, -34.61, -58.38, 1),
            Stop::new(2, -34.62, -58.38, 1),
            Stop::new(3, -34.63, -58.38, 1),
        ];
        let locations: Vec<_> = stops.iter().map(Stop::location).collect();
        let distances = DistanceMatrix::from_locations(&locations).expect("valid");
        let vehicles = capacities
            .iter()
            .enumerate()
            .map(|(id, &c)| Vehicle::new(id, c))
            .collect();
        RoutingModel::build(stops, vehicles, distances).expect("feasible")
    }

    #[test]
    fn test_all_on_one_route() {
        let model = line_model(&[10, 10, 10]);
        let assignment = path_cheapest_arc(&model);
        assert_eq!(assignment.sequence(0), &[1, 2, 3]);
        assert!(assignment.sequence(1).is_empty());
        assert!(assignment.unrouted().is_empty());
    }

    #[test]
    fn test_splits_on_capacity() {
        let model = line_model(&[2, 2]);
        let assignment = path_cheapest_arc(&model);
        assert_eq!(assignment.sequence(0), &[1, 2]);
        assert_eq!(assignment.sequence(1), &[3]);
        assert!(assignment.unrouted().is_empty());
    }

    #[test]
    fn test_fleet_exhaustion_leaves_unrouted() {
        let model = line_model(&[1]);
        let assignment = path_cheapest_arc(&model);
        assert_eq!(assignment.sequence(0), &[1]);
        assert_eq!(assignment.unrouted(), &[2, 3]);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let model = line_model(&[2, 2]);
        let assignment = path_cheapest_arc(&model);
        for (vehicle, sequence) in assignment.sequences().iter().enumerate() {
            let load: u32 = sequence.iter().map(|&s| model.demand(s)).sum();
            assert!(load <= model.capacity(vehicle));
        }
    }

    #[test]
    fn test_chooses_cheapest_arc_first() {
        let stops = vec![
            Stop::depot(-34.60, -58.38),
            Stop::new(1, -34.70, -58.38, 1), // far
            Stop::new(2, -34.61, -58.38, 1), // near
        ];
        let locations: Vec<_> = stops.iter().map(Stop::location).collect();
        let distances = DistanceMatrix::from_locations(&locations).expect("valid");
        let model =
            RoutingModel::build(stops, vec![Vehicle::new(0, 10)], distances).expect("feasible");
        let assignment = path_cheapest_arc(&model);
        assert_eq!(assignment.sequence(0), &[2, 1]);
    }
}
