//! Dense distance matrix in integer meters.

use crate::distance::geodesic::{haversine_meters, is_valid_coordinate};
use crate::error::RoutingError;

/// A dense n×n matrix of great-circle distances, stored row-major in
/// whole meters.
///
/// The matrix is a plain lookup table: both `(i, j)` and `(j, i)` are
/// computed and stored, even though the underlying metric is symmetric.
/// Fractional meters are truncated, never rounded.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
///
/// let locations = vec![(-34.6037, -58.3816), (-34.6083, -58.3725)];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 0), 0);
/// assert!(dm.get(0, 1) > 0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes the geodesic distance matrix over `(lat, lon)` pairs in
    /// decimal degrees.
    ///
    /// Every ordered pair is computed independently; the diagonal is zero.
    ///
    /// # Errors
    ///
    /// [`RoutingError::NoLocations`] if the slice is empty, and
    /// [`RoutingError::CoordinateOutOfRange`] if any coordinate falls
    /// outside [-90, 90] × [-180, 180].
    pub fn from_locations(locations: &[(f64, f64)]) -> Result<Self, RoutingError> {
        if locations.is_empty() {
            return Err(RoutingError::NoLocations);
        }
        for (index, &(lat, lon)) in locations.iter().enumerate() {
            if !is_valid_coordinate(lat, lon) {
                return Err(RoutingError::CoordinateOutOfRange { index, lat, lon });
            }
        }

        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, haversine_meters(locations[i], locations[j]) as u64);
                }
            }
        }
        Ok(dm)
    }

    /// Returns the distance in meters from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, meters: u64) {
        self.data[from * self.size + to] = meters;
    }

    /// Number of locations covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
