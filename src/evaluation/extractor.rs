//! Route extraction from a search assignment.

use crate::models::{Assignment, Route, RoutingModel};

/// Walks an assignment vehicle by vehicle, producing the ordered route and
/// the accumulated arc cost for each.
///
/// Extraction is a pure function of the assignment and the model: no
/// search, no mutation, identical output on repeated calls. Every route
/// starts at the depot; the closing return arc is counted in the distance
/// but the trailing depot is not repeated in the sequence. A vehicle the
/// search left unused extracts to `[depot]` with distance 0.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::evaluation::RouteExtractor;
/// use fleet_routing::models::{Assignment, RoutingModel, Stop, Vehicle};
///
/// let stops = vec![
///     Stop::depot(-34.60, -58.38),
///     Stop::new(1, -34.61, -58.38, 1),
/// ];
/// let locations: Vec<_> = stops.iter().map(|s| s.location()).collect();
/// let distances = DistanceMatrix::from_locations(&locations).unwrap();
/// let model = RoutingModel::build(stops, vec![Vehicle::new(0, 5)], distances).unwrap();
///
/// let assignment = Assignment::new(vec![vec![1]], vec![]);
/// let routes = RouteExtractor::new(&model).extract(&assignment);
/// assert_eq!(routes[0].stops(), &[0, 1]);
/// assert_eq!(
///     routes[0].total_distance(),
///     model.distance(0, 1) + model.distance(1, 0),
/// );
/// ```
pub struct RouteExtractor<'a> {
    model: &'a RoutingModel,
}

impl<'a> RouteExtractor<'a> {
    /// Creates an extractor over the given model.
    pub fn new(model: &'a RoutingModel) -> Self {
        Self { model }
    }

    /// Extracts one [`Route`] per vehicle.
    pub fn extract(&self, assignment: &Assignment) -> Vec<Route> {
        assignment
            .sequences()
            .iter()
            .enumerate()
            .map(|(vehicle, sequence)| self.extract_route(vehicle, sequence))
            .collect()
    }

    fn extract_route(&self, vehicle: usize, sequence: &[usize]) -> Route {
        let depot = self.model.depot();
        let mut stops = Vec::with_capacity(sequence.len() + 1);
        stops.push(depot);

        let mut distance: u64 = 0;
        let mut load: u32 = 0;
        let mut previous = depot;
        for &stop in sequence {
            distance += self.model.distance(previous, stop);
            load += self.model.demand(stop);
            stops.push(stop);
            previous = stop;
        }
        distance += self.model.distance(previous, depot);

        Route::new(vehicle, stops, distance, load)
    }
}
