//! Great-circle distance between geographic coordinates.

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance in meters between two `(lat, lon)`
/// points given in decimal degrees.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::haversine_meters;
///
/// let obelisco = (-34.6037, -58.3816);
/// let cabildo = (-34.6083, -58.3725);
/// let d = haversine_meters(obelisco, cabildo);
/// assert!(d > 800.0 && d < 1200.0);
/// assert_eq!(haversine_meters(obelisco, obelisco), 0.0);
/// ```
pub fn haversine_meters(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Returns `true` if the pair is a finite coordinate within
/// [-90, 90] latitude × [-180, 180] longitude.
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
}
