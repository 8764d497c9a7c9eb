//! Guided local search improvement loop.
//!
//! # Algorithm
//!
//! Alternates local descent with penalization. Descent runs over an
//! augmented cost matrix
//!
//! ```text
//! c'(i, j) = c(i, j) + lambda × penalty(i, j)
//! ```
//!
//! and each time it reaches a local optimum, the arcs of that optimum with
//! the highest utility
//!
//! ```text
//! utility(i, j) = c(i, j) / (1 + penalty(i, j))
//! ```
//!
//! are penalized, pushing the next descent away from long, repeatedly-used
//! arcs. The best assignment is tracked under true costs, so penalties
//! only steer the search, never the result. The loop is anytime: it checks
//! the deadline every round and returns the best assignment found so far.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//! application to the traveling salesman problem", *European Journal of
//! Operational Research* 113(2), 469-499.

use std::time::Instant;

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::local_search::{descend, route_distance};
use crate::models::{Assignment, RoutingModel};

use super::penalties::ArcPenalties;

/// Scaling factor for the penalty weight, applied to the mean arc cost of
/// the first local optimum.
const PENALTY_ALPHA: f64 = 0.1;

/// Improves an assignment under guided local search until the deadline.
///
/// Unrouted stops are carried through untouched; the improvement phase
/// never routes or drops stops, it only reorders and redistributes the
/// routed ones.
pub fn improve(model: &RoutingModel, initial: Assignment, deadline: Instant) -> Assignment {
    let (mut current, unrouted) = initial.into_parts();
    let depot = model.depot();
    let base = model.distances();

    descend(&mut current, model, base, deadline);
    let mut best = current.clone();
    let mut best_cost = total_cost(&best, depot, base);

    let lambda = penalty_weight(best_cost, &best);
    let mut penalties = ArcPenalties::new(base.size());
    let mut augmented = base.clone();
    let mut rounds: u64 = 0;

    while Instant::now() < deadline {
        if !penalize_round(&current, depot, base, lambda, &mut penalties, &mut augmented) {
            break;
        }
        descend(&mut current, model, &augmented, deadline);

        let cost = total_cost(&current, depot, base);
        if cost < best_cost {
            best_cost = cost;
            best = current.clone();
        }
        rounds += 1;
    }

    debug!(rounds, best_cost, "guided local search finished");
    Assignment::new(best, unrouted)
}

/// Sum of circuit distances across all routes.
fn total_cost(routes: &[Vec<usize>], depot: usize, distances: &DistanceMatrix) -> u64 {
    routes
        .iter()
        .map(|r| route_distance(r, depot, distances))
        .sum()
}

/// Lambda scaled to the solution: `alpha × cost / arcs`, at least 1.
fn penalty_weight(cost: u64, routes: &[Vec<usize>]) -> u64 {
    let arcs: usize = routes
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.len() + 1)
        .sum();
    if arcs == 0 {
        return 1;
    }
    ((PENALTY_ALPHA * cost as f64 / arcs as f64) as u64).max(1)
}

/// Penalizes every maximum-utility arc of the current solution, bumping
/// the augmented matrix in both directions. Returns `false` when the
/// solution has no arcs to penalize.
fn penalize_round(
    routes: &[Vec<usize>],
    depot: usize,
    base: &DistanceMatrix,
    lambda: u64,
    penalties: &mut ArcPenalties,
    augmented: &mut DistanceMatrix,
) -> bool {
    let arcs = solution_arcs(routes, depot);
    if arcs.is_empty() {
        return false;
    }

    let utilities: Vec<f64> = arcs
        .iter()
        .map(|&(from, to)| base.get(from, to) as f64 / (1.0 + penalties.count(from, to) as f64))
        .collect();
    let max_utility = utilities.iter().copied().fold(f64::MIN, f64::max);

    for (idx, &(from, to)) in arcs.iter().enumerate() {
        if utilities[idx] >= max_utility {
            penalties.penalize(from, to);
            augmented.set(from, to, augmented.get(from, to) + lambda);
            augmented.set(to, from, augmented.get(to, from) + lambda);
        }
    }
    true
}

/// Every directed arc of the solution, depot arcs included.
fn solution_arcs(routes: &[Vec<usize>], depot: usize) -> Vec<(usize, usize)> {
    let mut arcs = Vec::new();
    for route in routes.iter().filter(|r| !r.is_empty()) {
        arcs.push((depot, route[0]));
        for pair in route.windows(2) {
            arcs.push((pair[0], pair[1]));
        }
        arcs.push((route[route.len() - 1], depot));
    }
    arcs
}
