//! Domain model types for the routing engine.
//!
//! Stops with geographic locations and demands, vehicles with capacity,
//! the validated routing model handed to search, the assignment the search
//! produces, and the extracted per-vehicle route.

mod assignment;
mod problem;
mod route;
mod stop;
mod vehicle;

pub use assignment::Assignment;
pub use problem::RoutingModel;
pub use route::Route;
pub use stop::Stop;
pub use vehicle::Vehicle;
