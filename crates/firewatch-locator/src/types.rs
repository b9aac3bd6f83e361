use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of a coordinate pair a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

impl CoordinateField {
    /// Inclusive range of valid values in degrees
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    fn check(self, value: f64) -> Result<(), CoordinateError> {
        let (min, max) = self.bounds();
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(CoordinateError { field: self, value })
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude or longitude that is non-finite or out of range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{field} must be a finite number in [{}, {}], got {value}", .field.bounds().0, .field.bounds().1)]
pub struct CoordinateError {
    pub field: CoordinateField,
    pub value: f64,
}

/// A point on the Earth's surface in decimal degrees.
///
/// Fields are public so callers can build values from any source; use
/// [`Coordinate::new`] or [`Coordinate::validate`] to check the ranges.
/// Deserialization goes through [`Coordinate::new`], so out-of-range input
/// is rejected, and accepts `lat`/`lng` as well as the full field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinateRecord")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
struct CoordinateRecord {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    longitude: f64,
}

impl TryFrom<CoordinateRecord> for Coordinate {
    type Error = CoordinateError;

    fn try_from(record: CoordinateRecord) -> Result<Self, Self::Error> {
        Self::new(record.latitude, record.longitude)
    }
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check latitude first, then longitude.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        CoordinateField::Latitude.check(self.latitude)?;
        CoordinateField::Longitude.check(self.longitude)
    }

    /// The point on the opposite side of the globe.
    pub fn antipode(&self) -> Self {
        let longitude = if self.longitude > 0.0 {
            self.longitude - 180.0
        } else {
            self.longitude + 180.0
        };

        Self {
            latitude: -self.latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// A labelled point in a search catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    pub coordinate: Coordinate,
    pub payload: T,
}

impl<T> Candidate<T> {
    pub fn new(coordinate: Coordinate, payload: T) -> Self {
        Self {
            coordinate,
            payload,
        }
    }
}

/// Identifies the offending point when a search rejects its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRef {
    Query,
    /// Position in the catalog slice
    Candidate(usize),
    /// First argument of a pairwise distance
    Origin,
    /// Second argument of a pairwise distance
    Target,
}

impl fmt::Display for PointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Candidate(index) => write!(f, "candidate #{}", index),
            Self::Origin => f.write_str("origin"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Nearest-point search errors
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LocatorError {
    #[error("Invalid {point} coordinate: {source}")]
    InvalidCoordinate {
        point: PointRef,
        source: CoordinateError,
    },
}

impl LocatorError {
    pub fn point(&self) -> PointRef {
        match self {
            Self::InvalidCoordinate { point, .. } => *point,
        }
    }

    pub fn field(&self) -> CoordinateField {
        match self {
            Self::InvalidCoordinate { source, .. } => source.field,
        }
    }
}

/// Best match borrowed from the catalog it was found in.
#[derive(Debug, PartialEq)]
pub struct Nearest<'a, T> {
    /// Position of the match in the catalog
    pub index: usize,
    pub candidate: &'a Candidate<T>,
    pub distance_km: f64,
}

// Manual impls: a derive would demand `T: Copy` for a struct that only holds `&T`.
impl<T> Clone for Nearest<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nearest<'_, T> {}

impl<'a, T> Nearest<'a, T> {
    pub fn payload(&self) -> &'a T {
        &self.candidate.payload
    }

    pub fn coordinate(&self) -> Coordinate {
        self.candidate.coordinate
    }
}

impl<T: Clone> Nearest<'_, T> {
    /// Detach the match from the catalog borrow.
    pub fn into_owned(self) -> NearestMatch<T> {
        NearestMatch {
            index: self.index,
            candidate: self.candidate.clone(),
            distance_km: self.distance_km,
        }
    }
}

/// Owned copy of a [`Nearest`] result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch<T> {
    pub index: usize,
    pub candidate: Candidate<T>,
    pub distance_km: f64,
}

impl<T> NearestMatch<T> {
    pub fn payload(&self) -> &T {
        &self.candidate.payload
    }

    /// Distance rounded to two decimals, e.g. "3.11 km"
    pub fn distance_label(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }
}
