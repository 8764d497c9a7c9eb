//! Error types for the routing engine.

use thiserror::Error;

/// Errors produced while validating inputs, building a routing model,
/// partitioning stops, or searching for a feasible assignment.
///
/// Input validation errors are raised before any model is built; a solve
/// either fully succeeds or fails with one of these; no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// No locations were given. At least the depot is required.
    #[error("no locations provided")]
    NoLocations,

    /// A coordinate lies outside [-90, 90] latitude × [-180, 180] longitude.
    #[error("location {index} out of range: ({lat}, {lon})")]
    CoordinateOutOfRange {
        /// Index of the offending location in the input order.
        index: usize,
        /// Latitude in decimal degrees.
        lat: f64,
        /// Longitude in decimal degrees.
        lon: f64,
    },

    /// Vehicle capacity must be at least 1.
    #[error("vehicle capacity must be positive")]
    ZeroCapacity,

    /// Requested fleet size must be at least 1.
    #[error("fleet size must be positive")]
    ZeroFleetSize,

    /// A model cannot be built without vehicles.
    #[error("model requires at least one vehicle")]
    NoVehicles,

    /// The stop list and the distance matrix disagree in size.
    #[error("model has {stops} stops but the distance matrix covers {matrix}")]
    StopCountMismatch {
        /// Number of stops handed to the builder.
        stops: usize,
        /// Size of the distance matrix.
        matrix: usize,
    },

    /// A stop demands more than any vehicle can carry, so no assignment
    /// can ever serve it.
    #[error("stop {stop} demands {demand} but the largest capacity is {max_capacity}")]
    UnservableStop {
        /// Index of the unservable stop.
        stop: usize,
        /// Its demand.
        demand: u32,
        /// The largest capacity in the fleet.
        max_capacity: u32,
    },

    /// The clustering backend rejected the partitioning request.
    #[error("clustering failed: {0}")]
    Clustering(String),

    /// The search exhausted its time budget without a feasible assignment.
    #[error("no feasible assignment found within the time budget")]
    NoFeasibleSolution,
}
