//! Centralized error types for the Firewatch application.
//!
//! This module provides a typed error hierarchy that:
//! - Wraps the locator crate's errors without losing their detail
//! - Provides user-friendly messages suitable for display
//! - Preserves full error context for debugging/logging

use firewatch_locator::{CatalogError, LocationError, LocatorError};
use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Locator error: {0}")]
    Locator(#[from] LocatorError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

impl AppError {
    /// Returns a user-friendly message.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Locator(LocatorError::InvalidCoordinate { .. }) => {
                "A coordinate is out of range. Check latitude and longitude."
            }
            AppError::Catalog(CatalogError::Io { .. }) => {
                "The fire-station list could not be read. Check the catalog path."
            }
            AppError::Catalog(CatalogError::Parse(_)) => {
                "The fire-station list is malformed. Check the catalog file."
            }
            AppError::Catalog(CatalogError::InvalidStation { .. }) => {
                "A fire station in the list has an invalid position."
            }
            AppError::Location(LocationError::PermissionDenied) => {
                "Unable to retrieve your location. Please enable location services."
            }
            AppError::Location(LocationError::Timeout) => {
                "Finding your location took too long. Please try again."
            }
            AppError::Location(_) => "Your location is unavailable. Enter a position instead.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),

    #[error("Configuration file {path} could not be accessed: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => {
                "No position given and no home set. Pass --lat and --lon or add [home] to the config."
            }
            ConfigError::Io { .. } => "The configuration file could not be read or written.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firewatch_locator::{Coordinate, CoordinateField, PointRef};

    #[test]
    fn test_user_messages_are_non_empty() {
        let coordinate_error = Coordinate::new(91.0, 0.0).unwrap_err();
        let errors = vec![
            AppError::Config(ConfigError::Invalid("test".into())),
            AppError::Locator(LocatorError::InvalidCoordinate {
                point: PointRef::Query,
                source: coordinate_error,
            }),
            AppError::Catalog(CatalogError::InvalidStation {
                index: 0,
                name: "test".into(),
                source: coordinate_error,
            }),
            AppError::Location(LocationError::ServiceUnavailable),
            AppError::Location(LocationError::PermissionDenied),
            AppError::Config(ConfigError::Io {
                path: "config.toml".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }),
        ];

        for error in errors {
            assert!(!error.user_message().is_empty(), "{:?}", error);
        }
    }

    #[test]
    fn test_locator_error_conversion() {
        let err = LocatorError::InvalidCoordinate {
            point: PointRef::Candidate(3),
            source: Coordinate::new(0.0, 200.0).unwrap_err(),
        };
        let app_err: AppError = err.into();
        assert!(matches!(
            app_err,
            AppError::Locator(inner)
                if inner.point() == PointRef::Candidate(3)
                    && inner.field() == CoordinateField::Longitude
        ));
    }

    #[test]
    fn test_location_denied_message() {
        let app_err: AppError = LocationError::PermissionDenied.into();
        assert_eq!(
            app_err.user_message(),
            "Unable to retrieve your location. Please enable location services."
        );
    }

    #[test]
    fn test_missing_home_message_points_at_fix() {
        let app_err: AppError = ConfigError::MissingSetting("home".into()).into();
        assert!(app_err.user_message().contains("--lat"));
        assert!(app_err.to_string().contains("home"));
    }

    #[test]
    fn test_display_keeps_detail() {
        let app_err: AppError = LocatorError::InvalidCoordinate {
            point: PointRef::Query,
            source: Coordinate::new(91.0, 0.0).unwrap_err(),
        }
        .into();
        let text = app_err.to_string();
        assert!(text.contains("query"));
        assert!(text.contains("latitude"));
    }
}
