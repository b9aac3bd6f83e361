//! Great-circle distance on a spherical Earth.

use crate::types::{Coordinate, LocatorError, PointRef};
use std::f64::consts::PI;

/// Mean Earth radius used for all distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance between antipodal points, the largest value [`distance`] returns
pub const MAX_DISTANCE_KM: f64 = PI * EARTH_RADIUS_KM;

/// Haversine distance in kilometres from `origin` to `target`.
///
/// Both points are validated first; an invalid one is reported as
/// [`PointRef::Origin`] or [`PointRef::Target`].
pub fn distance(origin: Coordinate, target: Coordinate) -> Result<f64, LocatorError> {
    origin.validate().map_err(|source| LocatorError::InvalidCoordinate {
        point: PointRef::Origin,
        source,
    })?;
    target.validate().map_err(|source| LocatorError::InvalidCoordinate {
        point: PointRef::Target,
        source,
    })?;

    Ok(haversine_km(origin, target))
}

/// Haversine kernel for coordinates already known to be valid.
///
/// The intermediate term is clamped to `[0, 1]` so rounding near coincident
/// or antipodal points never takes `asin` outside its domain.
pub(crate) fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}
