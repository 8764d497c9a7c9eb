//! Inter-route relocation operator.
//!
//! # Algorithm
//!
//! Scans every (stop, target route, position) triple for the single move
//! with the largest distance reduction that keeps the target vehicle
//! within capacity, and applies it.
//!
//! Routes are indexed by vehicle, so capacity is checked against the
//! receiving vehicle, not the donor.

use crate::distance::DistanceMatrix;
use crate::models::RoutingModel;

#[derive(Debug, Clone)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
    delta: i64,
}

/// Applies the best improving inter-route relocation, if one exists.
/// Returns `true` if a stop was moved.
///
/// `distances` is passed separately from the model so an augmented cost
/// matrix can drive the move selection while demands and capacities stay
/// those of the model.
pub fn relocate_pass(
    routes: &mut [Vec<usize>],
    model: &RoutingModel,
    distances: &DistanceMatrix,
) -> bool {
    if routes.len() < 2 {
        return false;
    }

    match find_best_relocate(routes, model, distances) {
        Some(mv) => {
            let stop = routes[mv.from_route].remove(mv.from_pos);
            routes[mv.to_route].insert(mv.to_pos, stop);
            true
        }
        None => false,
    }
}

fn find_best_relocate(
    routes: &[Vec<usize>],
    model: &RoutingModel,
    distances: &DistanceMatrix,
) -> Option<RelocateMove> {
    let depot = model.depot();
    let loads: Vec<u32> = routes
        .iter()
        .map(|r| r.iter().map(|&s| model.demand(s)).sum())
        .collect();

    let mut best: Option<RelocateMove> = None;

    for from_route in 0..routes.len() {
        for from_pos in 0..routes[from_route].len() {
            let stop = routes[from_route][from_pos];
            let removal = removal_cost(&routes[from_route], from_pos, depot, distances);

            for (to_route, target) in routes.iter().enumerate() {
                if to_route == from_route {
                    continue;
                }
                if loads[to_route] + model.demand(stop) > model.capacity(to_route) {
                    continue;
                }

                for to_pos in 0..=target.len() {
                    let insertion = insertion_cost(target, to_pos, stop, depot, distances);
                    let delta = removal + insertion;
                    if delta < 0 && best.as_ref().map_or(true, |b| delta < b.delta) {
                        best = Some(RelocateMove {
                            from_route,
                            from_pos,
                            to_route,
                            to_pos,
                            delta,
                        });
                    }
                }
            }
        }
    }

    best
}

/// Distance change from removing the stop at `pos`.
fn removal_cost(route: &[usize], pos: usize, depot: usize, distances: &DistanceMatrix) -> i64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() - 1 {
        depot
    } else {
        route[pos + 1]
    };
    let stop = route[pos];

    distances.get(prev, next) as i64
        - distances.get(prev, stop) as i64
        - distances.get(stop, next) as i64
}

/// Distance change from inserting `stop` at `pos`.
fn insertion_cost(
    route: &[usize],
    pos: usize,
    stop: usize,
    depot: usize,
    distances: &DistanceMatrix,
) -> i64 {
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() { depot } else { route[pos] };

    distances.get(prev, stop) as i64 + distances.get(stop, next) as i64
        - distances.get(prev, next) as i64
}
