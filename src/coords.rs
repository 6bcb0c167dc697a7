//! Geodetic to spherical-earth coordinate conversion.
//!
//! The propagation model works in (colatitude, longitude, radius) with
//! angles in radians and colatitude measured from the north pole.

/// A point in spherical-earth coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Angle from the north pole, radians.
    pub colatitude: f64,
    /// Longitude, radians.
    pub longitude: f64,
    /// Distance from the earth's center (or from the surface when the
    /// earth radius is zero), meters.
    pub radius: f64,
}

/// Latitude in degrees to colatitude in radians.
pub fn to_colatitude(latitude_deg: f64) -> f64 {
    (90.0 - latitude_deg).to_radians()
}

/// Colatitude in radians back to latitude in degrees.
pub fn to_latitude(colatitude_rad: f64) -> f64 {
    90.0 - colatitude_rad.to_degrees()
}

/// Longitude in degrees to radians.
pub fn to_longitude(longitude_deg: f64) -> f64 {
    longitude_deg.to_radians()
}

/// Positive-down depth to radial distance.
///
/// With a zero earth radius the result is `-depth`, i.e. height relative
/// to a flat ocean surface.
pub fn to_radius(depth: f64, earth_radius: f64) -> f64 {
    if earth_radius > 0.0 {
        earth_radius - depth
    } else {
        -depth
    }
}

/// Radial distance back to positive-down depth.
pub fn to_depth(radius: f64, earth_radius: f64) -> f64 {
    if earth_radius > 0.0 {
        earth_radius - radius
    } else {
        -radius
    }
}

/// Convert a geodetic sample to spherical-earth coordinates.
pub fn to_spherical(
    latitude_deg: f64,
    longitude_deg: f64,
    depth: f64,
    earth_radius: f64,
) -> SphericalCoords {
    SphericalCoords {
        colatitude: to_colatitude(latitude_deg),
        longitude: to_longitude(longitude_deg),
        radius: to_radius(depth, earth_radius),
    }
}
