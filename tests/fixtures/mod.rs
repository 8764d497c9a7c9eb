//! Test fixtures for fleet-routing.
//!
//! Real Buenos Aires / Córdoba coordinates for realistic instances, plus
//! small synthetic layouts with known optimal tours.

#![allow(dead_code)]

pub mod buenos_aires_locations;

pub use buenos_aires_locations::*;
