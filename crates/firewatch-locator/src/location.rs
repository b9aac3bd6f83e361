//! Sources for the "current position" a search runs from.

use crate::types::Coordinate;

/// Location service errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Anything that can report where the user currently is.
pub trait PositionSource: Send + Sync {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// A position that never moves, e.g. a configured home location.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPosition {
    label: String,
    coordinate: Coordinate,
}

impl FixedPosition {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}

impl PositionSource for FixedPosition {
    fn name(&self) -> &str {
        &self.label
    }

    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

/// Stand-in for platforms without a geolocation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePosition;

impl PositionSource for UnavailablePosition {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}
