//! Geographic pre-partitioning of stops.
//!
//! # Algorithm
//!
//! K-means over raw `(lat, lon)` coordinates, Euclidean in coordinate
//! space, an approximation that holds at the scale of a stop
//! distribution. The depot takes no part in the clustering; it is
//! prefixed to every group afterwards so each cluster is a self-contained
//! sub-problem.
//!
//! Each cluster keeps an explicit `local → original` index array. Matching
//! re-indexed stops back by coordinate equality would break on duplicate
//! or near-duplicate coordinates.

use linfa::prelude::*;
use linfa_clustering::KMeans;
use ndarray::Array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::RoutingError;
use crate::models::Stop;

/// Seed for the clustering RNG. Fixed so a given input always partitions
/// the same way.
const KMEANS_SEED: u64 = 0;

const KMEANS_MAX_ITERATIONS: u64 = 300;

/// A group of stops assigned to one vehicle, re-indexed locally.
///
/// Local index 0 is the depot; members follow. `to_original[local]` maps a
/// local index back to the caller's indexing, with the depot mapping to 0
/// unconditionally. A cluster the partitioner left empty holds just the
/// depot and is skipped during solving.
#[derive(Debug, Clone)]
pub struct Cluster {
    stops: Vec<Stop>,
    to_original: Vec<usize>,
}

impl Cluster {
    fn new(depot: &Stop) -> Self {
        Self {
            stops: vec![Stop::depot(depot.lat(), depot.lon())],
            to_original: vec![0],
        }
    }

    fn push(&mut self, original: &Stop) {
        let local_id = self.stops.len();
        self.stops.push(Stop::new(
            local_id,
            original.lat(),
            original.lon(),
            original.demand(),
        ));
        self.to_original.push(original.id());
    }

    /// Locally re-indexed stops, depot first.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The `local → original` index mapping.
    pub fn to_original(&self) -> &[usize] {
        &self.to_original
    }

    /// Maps a local stop index back to the original input indexing.
    pub fn original_index(&self, local: usize) -> usize {
        self.to_original[local]
    }

    /// Number of member stops, excluding the depot.
    pub fn num_members(&self) -> usize {
        self.stops.len() - 1
    }

    /// Returns `true` if the cluster holds only the depot.
    pub fn is_empty(&self) -> bool {
        self.stops.len() <= 1
    }
}

/// Partitions the non-depot stops into `k` geographic clusters.
///
/// `stops[0]` must be the depot; it is excluded from clustering and
/// prefixed to every resulting group. When there are no more members than
/// clusters, k-means degenerates and each member simply gets its own
/// cluster, the rest staying empty.
///
/// # Errors
///
/// [`RoutingError::ZeroFleetSize`] when `k == 0`, and
/// [`RoutingError::Clustering`] if the k-means backend fails.
pub fn partition(stops: &[Stop], k: usize) -> Result<Vec<Cluster>, RoutingError> {
    if k == 0 {
        return Err(RoutingError::ZeroFleetSize);
    }
    if stops.is_empty() {
        return Err(RoutingError::NoLocations);
    }

    let depot = &stops[0];
    let members = &stops[1..];
    let mut clusters: Vec<Cluster> = (0..k).map(|_| Cluster::new(depot)).collect();

    if members.len() <= k {
        for (i, member) in members.iter().enumerate() {
            clusters[i].push(member);
        }
        return Ok(clusters);
    }

    let coordinates: Vec<f64> = members
        .iter()
        .flat_map(|s| [s.lat(), s.lon()])
        .collect();
    let observations = Array::from_shape_vec((members.len(), 2), coordinates)
        .map_err(|e| RoutingError::Clustering(e.to_string()))?;
    let dataset = Dataset::from(observations);

    let rng = StdRng::seed_from_u64(KMEANS_SEED);
    let model = KMeans::params_with_rng(k, rng)
        .max_n_iterations(KMEANS_MAX_ITERATIONS)
        .fit(&dataset)
        .map_err(|e| RoutingError::Clustering(e.to_string()))?;
    let labels = model.predict(&dataset);

    for (i, &label) in labels.iter().enumerate() {
        clusters[label].push(&members[i]);
    }

    Ok(clusters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pair_stops() -> Vec<Stop> {
        vec![
            Stop::depot(-33.0, -61.0),
            Stop::new(1, -34.6037, -58.3816, 1),
            Stop::new(2, -34.6158, -58.4333, 1),
            Stop::new(3, -31.4201, -64.1888, 1),
            Stop::new(4, -31.4135, -64.1811, 1),
        ]
    }

    #[test]
    fn test_partition_separates_distant_pairs() {
        let stops = two_pair_stops();
        let clusters = partition(&stops, 2).expect("partition");
        assert_eq!(clusters.len(), 2);

        let mut groups: Vec<Vec<usize>> = clusters
            .iter()
            .map(|c| {
                let mut members: Vec<usize> = c.to_original()[1..].to_vec();
                members.sort_unstable();
                members
            })
            .collect();
        groups.sort();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_depot_prefix_and_mapping() {
        let stops = two_pair_stops();
        let clusters = partition(&stops, 2).expect("partition");
        for cluster in &clusters {
            assert_eq!(cluster.stops()[0].id(), 0);
            assert_eq!(cluster.stops()[0].demand(), 0);
            assert_eq!(cluster.original_index(0), 0);
            // Local ids are dense and mapped back one-to-one.
            for (local, stop) in cluster.stops().iter().enumerate() {
                assert_eq!(stop.id(), local);
            }
            assert_eq!(cluster.to_original().len(), cluster.stops().len());
        }
    }

    #[test]
    fn test_partition_covers_all_members() {
        let stops = two_pair_stops();
        let clusters = partition(&stops, 3).expect("partition");
        let mut seen: Vec<usize> = clusters
            .iter()
            .flat_map(|c| c.to_original()[1..].iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_degenerate_one_stop_per_cluster() {
        let stops = vec![
            Stop::depot(0.0, 0.0),
            Stop::new(1, 1.0, 1.0, 1),
            Stop::new(2, 2.0, 2.0, 1),
        ];
        let clusters = partition(&stops, 4).expect("partition");
        assert_eq!(clusters.len(), 4);
        assert_eq!(clusters.iter().filter(|c| !c.is_empty()).count(), 2);
        for cluster in clusters.iter().filter(|c| !c.is_empty()) {
            assert_eq!(cluster.num_members(), 1);
        }
        for cluster in clusters.iter().filter(|c| c.is_empty()) {
            assert_eq!(cluster.to_original(), &[0]);
        }
    }

    #[test]
    fn test_single_cluster_takes_everything() {
        let stops = two_pair_stops();
        let clusters = partition(&stops, 1).expect("partition");
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].num_members(), 4);
    }

    #[test]
    fn test_zero_clusters_rejected() {
        let stops = two_pair_stops();
        assert!(matches!(
            partition(&stops, 0),
            Err(RoutingError::ZeroFleetSize)
        ));
    }

    #[test]
    fn test_deterministic() {
        let stops = two_pair_stops();
        let a = partition(&stops, 2).expect("partition");
        let b = partition(&stops, 2).expect("partition");
        let flatten = |clusters: &[Cluster]| -> Vec<Vec<usize>> {
            clusters.iter().map(|c| c.to_original().to_vec()).collect()
        };
        assert_eq!(flatten(&a), flatten(&b));
    }
}
