//! Routing model: the validated constraint formulation handed to search.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;

use super::{Stop, Vehicle};

/// A capacitated routing model over a fixed distance matrix.
///
/// Binds the arc-cost table, per-stop demands, and the fleet into a single
/// immutable value. The depot is stop 0; every vehicle starts there,
/// accumulates demand stop by stop without ever exceeding its capacity,
/// and returns there. Built once per solve, owned for its duration, and
/// discarded; no state survives across solves.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::models::{RoutingModel, Stop, Vehicle};
///
/// let stops = vec![
///     Stop::depot(-34.6037, -58.3816),
///     Stop::new(1, -34.6158, -58.4333, 1),
/// ];
/// let locations: Vec<_> = stops.iter().map(|s| s.location()).collect();
/// let distances = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let model = RoutingModel::build(stops, vec![Vehicle::new(0, 10)], distances).unwrap();
/// assert_eq!(model.num_stops(), 1);
/// assert_eq!(model.num_vehicles(), 1);
/// assert_eq!(model.depot(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingModel {
    stops: Vec<Stop>,
    vehicles: Vec<Vehicle>,
    distances: DistanceMatrix,
}

impl RoutingModel {
    /// Validates and assembles a model.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::NoVehicles`] when the fleet is empty.
    /// - [`RoutingError::NoLocations`] when the stop list is empty.
    /// - [`RoutingError::StopCountMismatch`] when the stop list and the
    ///   matrix disagree in size.
    /// - [`RoutingError::UnservableStop`] when some stop demands more than
    ///   any vehicle can carry: no assignment could ever serve it, so the
    ///   contradiction is rejected here instead of leaving the stop to be
    ///   quietly dropped by the search.
    pub fn build(
        stops: Vec<Stop>,
        vehicles: Vec<Vehicle>,
        distances: DistanceMatrix,
    ) -> Result<Self, RoutingError> {
        if vehicles.is_empty() {
            return Err(RoutingError::NoVehicles);
        }
        if stops.is_empty() {
            return Err(RoutingError::NoLocations);
        }
        if stops.len() != distances.size() {
            return Err(RoutingError::StopCountMismatch {
                stops: stops.len(),
                matrix: distances.size(),
            });
        }
        debug_assert_eq!(stops[0].demand(), 0, "depot must have zero demand");

        let max_capacity = vehicles
            .iter()
            .map(Vehicle::capacity)
            .max()
            .unwrap_or_default();
        for stop in stops.iter().skip(1) {
            if stop.demand() > max_capacity {
                return Err(RoutingError::UnservableStop {
                    stop: stop.id(),
                    demand: stop.demand(),
                    max_capacity,
                });
            }
        }

        Ok(Self {
            stops,
            vehicles,
            distances,
        })
    }

    /// All locations, index 0 = depot.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The fleet.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of stops to serve, excluding the depot.
    pub fn num_stops(&self) -> usize {
        self.stops.len() - 1
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Depot index. Always 0 in this formulation.
    pub fn depot(&self) -> usize {
        0
    }

    /// Demand of a stop.
    pub fn demand(&self, stop: usize) -> u32 {
        self.stops[stop].demand()
    }

    /// Capacity of a vehicle.
    pub fn capacity(&self, vehicle: usize) -> u32 {
        self.vehicles[vehicle].capacity()
    }

    /// Arc cost in meters from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.distances.get(from, to)
    }

    /// The full arc-cost table.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
