//! Intra-route Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries relocating segments of 1, 2, or 3 consecutive stops to a
//! different position within the same route, accepting the first move that
//! shortens the circuit.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and
//! Their Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::DistanceMatrix;

/// Runs one Or-opt sweep over a route. Returns `true` if a segment was
/// relocated.
pub fn or_opt_pass(route: &mut Vec<usize>, depot: usize, distances: &DistanceMatrix) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    for seg_len in 1..=3.min(n - 1) {
        for start in 0..=n - seg_len {
            let end = start + seg_len;
            let prev = if start == 0 { depot } else { route[start - 1] };
            let next = if end == n { depot } else { route[end] };
            let first = route[start];
            let last = route[end - 1];

            let removal = distances.get(prev, next) as i64
                - distances.get(prev, first) as i64
                - distances.get(last, next) as i64;

            let mut reduced = route.clone();
            let segment: Vec<usize> = reduced.drain(start..end).collect();

            for pos in 0..=reduced.len() {
                if pos == start {
                    continue; // reinsertion in place
                }
                let a = if pos == 0 { depot } else { reduced[pos - 1] };
                let b = if pos == reduced.len() {
                    depot
                } else {
                    reduced[pos]
                };
                let insertion = distances.get(a, first) as i64 + distances.get(last, b) as i64
                    - distances.get(a, b) as i64;

                if removal + insertion < 0 {
                    let mut moved = reduced;
                    for (offset, &stop) in segment.iter().enumerate() {
                        moved.insert(pos + offset, stop);
                    }
                    *route = moved;
                    return true;
                }
            }
        }
    }

    false
}

/// Total circuit distance: `depot → route[0] → ... → route[n-1] → depot`.
pub fn route_distance(route: &[usize], depot: usize, distances: &DistanceMatrix) -> u64 {
    if route.is_empty() {
        return 0;
    }
    let mut dist = distances.get(depot, route[0]);
    for pair in route.windows(2) {
        dist += distances.get(pair[0], pair[1]);
    }
    dist + distances.get(route[route.len() - 1], depot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> DistanceMatrix {
        let locations = vec![
            (-34.60, -58.38),
            (-34.61, -58.38),
            (-34.62, -58.38),
            (-34.63, -58.38),
            (-34.64, -58.38),
        ];
        DistanceMatrix::from_locations(&locations).expect("valid")
    }

    #[test]
    fn test_relocates_out_of_place_stop() {
        // Stops 1 and 2 sit together near the depot; stop 3 is far out.
        // Visiting 3 between them pays the long detour twice.
        let locations = vec![
            (0.0, 0.0),
            (0.01, 0.0),
            (0.011, 0.001),
            (0.05, 0.05),
        ];
        let dm = DistanceMatrix::from_locations(&locations).expect("valid");
        let mut route = vec![1, 3, 2];
        let before = route_distance(&route, 0, &dm);
        let improved = or_opt_pass(&mut route, 0, &dm);
        assert!(improved);
        assert!(route_distance(&route, 0, &dm) < before);
    }

    #[test]
    fn test_route_distance_sums_arcs() {
        let dm = line_matrix();
        let route = [1, 2, 3];
        let expected =
            dm.get(0, 1) + dm.get(1, 2) + dm.get(2, 3) + dm.get(3, 0);
        assert_eq!(route_distance(&route, 0, &dm), expected);
    }

    #[test]
    fn test_route_distance_empty_and_single() {
        let dm = line_matrix();
        assert_eq!(route_distance(&[], 0, &dm), 0);
        assert_eq!(route_distance(&[2], 0, &dm), dm.get(0, 2) + dm.get(2, 0));
    }

    #[test]
    fn test_converges() {
        let dm = line_matrix();
        let mut route = vec![3, 1, 4, 2];
        while or_opt_pass(&mut route, 0, &dm) {}
        assert!(!or_opt_pass(&mut route, 0, &dm));
    }

    #[test]
    fn test_short_route_untouched() {
        let dm = line_matrix();
        let mut route = vec![1];
        assert!(!or_opt_pass(&mut route, 0, &dm));
        assert_eq!(route, vec![1]);
    }
}
