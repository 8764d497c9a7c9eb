//! Real Buenos Aires area locations for realistic test fixtures.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Central depot: Obelisco, Buenos Aires.
pub const DEPOT: Location = Location::new("Obelisco", -34.6037, -58.3816);

/// Delivery stops spread across Buenos Aires neighborhoods.
pub const CITY_STOPS: [Location; 10] = [
    Location::new("Caminito", -34.6395, -58.3628),
    Location::new("Recoleta Cemetery", -34.5875, -58.3932),
    Location::new("Planetario", -34.5696, -58.4118),
    Location::new("Plaza Serrano", -34.5889, -58.4303),
    Location::new("Abasto", -34.6037, -58.4108),
    Location::new("Parque Lezama", -34.6281, -58.3697),
    Location::new("Plaza de Mayo", -34.6083, -58.3712),
    Location::new("Caballito", -34.6190, -58.4400),
    Location::new("Retiro", -34.5915, -58.3734),
    Location::new("Parque Chacabuco", -34.6352, -58.4403),
];

/// Depot followed by every city stop, in fixture order.
pub fn city_locations() -> Vec<(f64, f64)> {
    let mut locations = vec![DEPOT.coords()];
    locations.extend(CITY_STOPS.iter().map(Location::coords));
    locations
}

/// Depot and three stops heading due south along one meridian,
/// roughly 1.1 km apart. The optimal circuit is out-and-back.
pub fn line_locations() -> Vec<(f64, f64)> {
    vec![
        (-34.60, -58.38),
        (-34.61, -58.38),
        (-34.62, -58.38),
        (-34.63, -58.38),
    ]
}

/// A depot between two tight pairs of stops in different cities:
/// two in Buenos Aires, two in Córdoba, ~650 km apart.
pub fn paired_cities_locations() -> Vec<(f64, f64)> {
    vec![
        (-33.0, -61.0),
        (-34.6037, -58.3816), // Buenos Aires
        (-34.6158, -58.4333), // Buenos Aires
        (-31.4201, -64.1888), // Córdoba
        (-31.4135, -64.1811), // Córdoba
    ]
}
