//! Parallel cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! All vehicle routes grow simultaneously. Each step scans every
//! (unrouted stop, vehicle, position) triple and performs the insertion
//! with the smallest detour cost
//!
//! ```text
//! delta = d(prev, u) + d(u, next) - d(prev, next)
//! ```
//!
//! subject to the target vehicle's remaining capacity. Stops with no
//! feasible insertion anywhere are left unrouted.
//!
//! # Complexity
//!
//! O(n³) in the worst case (n insertions, each scanning O(n²) triples).

use crate::models::{Assignment, RoutingModel};

/// Builds an initial assignment by globally cheapest insertion across all
/// vehicles at once.
///
/// # Examples
///
/// ```
/// use fleet_routing::constructive::parallel_cheapest_insertion;
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
/// let model = RoutingModel::build(stops, vec![Vehicle::new(0, 5)], distances).unwrap();
///
/// let assignment = parallel_cheapest_insertion(&model);
/// assert_eq!(assignment.num_served(), 2);
/// ```
pub fn parallel_cheapest_insertion(model: &RoutingModel) -> Assignment {
    let n = model.stops().len();
    let depot = model.depot();

    let mut sequences: Vec<Vec<usize>> = vec![Vec::new(); model.num_vehicles()];
    let mut loads: Vec<u32> = vec![0; model.num_vehicles()];
    let mut unrouted: Vec<usize> = (1..n).collect();

    loop {
        let mut best: Option<(usize, usize, usize, i64)> = None; // (unrouted idx, vehicle, pos, delta)

        for (ui, &stop) in unrouted.iter().enumerate() {
            let demand = model.demand(stop);
            for (vehicle, sequence) in sequences.iter().enumerate() {
                if loads[vehicle] + demand > model.capacity(vehicle) {
                    continue;
                }
                for pos in 0..=sequence.len() {
                    let prev = if pos == 0 { depot } else { sequence[pos - 1] };
                    let next = if pos == sequence.len() {
                        depot
                    } else {
                        sequence[pos]
                    };
                    let delta = model.distance(prev, stop) as i64
                        + model.distance(stop, next) as i64
                        - model.distance(prev, next) as i64;
                    if best.is_none() || delta < best.expect("checked is_none").3 {
                        best = Some((ui, vehicle, pos, delta));
                    }
                }
            }
        }

        match best {
            Some((ui, vehicle, pos, _)) => {
                let stop = unrouted.remove(ui);
                sequences[vehicle].insert(pos, stop);
                loads[vehicle] += model.demand(stop);
            }
            None => break,
        }
    }

    Assignment::new(sequences, unrouted)
}
