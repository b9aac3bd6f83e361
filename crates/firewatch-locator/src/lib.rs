//! Nearest fire-station locator for Firewatch
//!
//! Great-circle (haversine) distances over a caller-supplied catalog of
//! labelled coordinates, with the built-in Odisha fire-station list and
//! JSON catalog loading on top.

pub mod types;
pub mod distance;
pub mod nearest;
pub mod station;
pub mod location;

pub use types::*;
pub use distance::{distance, EARTH_RADIUS_KM, MAX_DISTANCE_KM};
pub use nearest::find_nearest;
pub use station::{CatalogError, FireStation, StationCatalog, StationMatch};
pub use location::{FixedPosition, LocationError, PositionSource, UnavailablePosition};
