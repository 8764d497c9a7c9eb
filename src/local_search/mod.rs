//! Local search operators for improving assignments.
//!
//! - [`two_opt_pass`] — intra-route 2-opt edge reversal
//! - [`or_opt_pass`] — intra-route segment relocation
//! - [`relocate_pass`] — inter-route stop relocation under capacity
//! - [`descend`] — deadline-aware driver combining the three

mod descent;
mod or_opt;
mod relocate;
mod two_opt;

pub use descent::descend;
pub use or_opt::{or_opt_pass, route_distance};
pub use relocate::relocate_pass;
pub use two_opt::two_opt_pass;
