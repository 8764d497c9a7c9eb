//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of edges in a route, compute the change in distance from
//! reversing the segment between them:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! A negative delta means the reversal shortens the circuit; the segment
//! is reversed in place (first-improvement strategy).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Runs one 2-opt sweep over a route, applying improving reversals as they
/// are found. Returns `true` if any reversal was applied.
///
/// The route is the stop sequence excluding the depot; arcs to and from
/// `depot` bound it on both ends.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::local_search::{route_distance, two_opt_pass};
///
/// let locations = vec![
///     (-34.60, -58.38),
///     (-34.61, -58.38),
///     (-34.62, -58.38),
///     (-34.63, -58.38),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let mut route = vec![1, 3, 2]; // crossing order
/// let before = route_distance(&route, 0, &dm);
/// two_opt_pass(&mut route, 0, &dm);
/// assert!(route_distance(&route, 0, &dm) <= before);
/// ```
pub fn two_opt_pass(route: &mut [usize], depot: usize, distances: &DistanceMatrix) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut improved = false;
    for i in 0..n - 1 {
        for j in i + 1..n {
            if two_opt_delta(route, depot, distances, i, j) < 0 {
                route[i..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Distance change from reversing the segment `[i..=j]`.
fn two_opt_delta(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> i64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost as i64 - old_cost as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::route_distance;

    fn square_matrix() -> DistanceMatrix {
        // Depot in the middle of a unit square of stops.
        let locations = vec![
            (0.005, 0.005),
            (0.0, 0.0),
            (0.01, 0.0),
            (0.0, 0.01),
            (0.01, 0.01),
        ];
        DistanceMatrix::from_locations(&locations).expect("valid")
    }

    #[test]
    fn test_uncrosses_square() {
        let dm = square_matrix();
        // 1 → 4 and 2 → 3 are both diagonals; perimeter order is shorter.
        let mut route = vec![1, 4, 2, 3];
        let before = route_distance(&route, 0, &dm);
        let improved = two_opt_pass(&mut route, 0, &dm);
        assert!(improved);
        assert!(route_distance(&route, 0, &dm) < before);
    }

    #[test]
    fn test_no_move_on_short_route() {
        let dm = square_matrix();
        let mut route = vec![2];
        assert!(!two_opt_pass(&mut route, 0, &dm));
        assert_eq!(route, vec![2]);
        let mut empty: Vec<usize> = Vec::new();
        assert!(!two_opt_pass(&mut empty, 0, &dm));
    }

    #[test]
    fn test_converges_to_fixed_point() {
        let dm = square_matrix();
        let mut route = vec![1, 4, 2, 3];
        while two_opt_pass(&mut route, 0, &dm) {}
        // One more sweep finds nothing.
        assert!(!two_opt_pass(&mut route, 0, &dm));
    }

    #[test]
    fn test_never_worsens() {
        let dm = square_matrix();
        for initial in [vec![1, 2, 3, 4], vec![4, 1, 3, 2], vec![3, 1, 4, 2]] {
            let mut route = initial.clone();
            let before = route_distance(&route, 0, &dm);
            two_opt_pass(&mut route, 0, &dm);
            assert!(route_distance(&route, 0, &dm) <= before, "worsened {initial:?}");
        }
    }
}
