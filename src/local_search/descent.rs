//! Combined improvement descent.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::models::RoutingModel;

use super::{or_opt_pass, relocate_pass, two_opt_pass};

/// Descends to a local optimum under the given cost matrix, interleaving
/// intra-route 2-opt and Or-opt sweeps with inter-route relocations.
///
/// The deadline is checked between sweeps; the descent stops early rather
/// than overrun it, leaving the routes at the best state reached so far.
pub fn descend(
    routes: &mut [Vec<usize>],
    model: &RoutingModel,
    distances: &DistanceMatrix,
    deadline: Instant,
) {
    let depot = model.depot();
    loop {
        if Instant::now() >= deadline {
            return;
        }

        let mut improved = false;
        for route in routes.iter_mut() {
            improved |= two_opt_pass(route, depot, distances);
            improved |= or_opt_pass(route, depot, distances);
        }
        improved |= relocate_pass(routes, model, distances);

        if !improved {
            return;
        }
    }
}
