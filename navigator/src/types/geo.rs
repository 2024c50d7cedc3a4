use std::f64::consts::PI;

pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in statute miles between two points given in degrees.
///
/// Works with any consistent sign convention for longitude (east or west
/// positive), since only the difference between both longitudes is used.
pub fn haversine_miles(origin_lat: f64, origin_lon: f64, dest_lat: f64, dest_lon: f64) -> f64 {
    let origin_lat_rad = origin_lat * PI / 180.0;
    let dest_lat_rad = dest_lat * PI / 180.0;

    let delta_lat = (dest_lat - origin_lat) * PI / 180.0;
    let delta_lon = (dest_lon - origin_lon) * PI / 180.0;

    // Haversine formula
    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat_rad.cos() * dest_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
