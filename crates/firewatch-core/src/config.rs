use firewatch_locator::{Coordinate, MAX_DISTANCE_KM};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Where a search takes its position from, which decides whether `[home]`
/// has to be usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    /// Fall back to the configured home position
    Home,
    /// Position given by the caller; `[home]` is not consulted
    Explicit,
}

/// One problem found in a config, keyed by its dotted TOML path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything `Config::validate` found. Errors block startup, warnings are
/// only logged.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors on one line, `"field: message; field: message"`
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        for (i, issue) in self.errors.iter().enumerate() {
            if i > 0 {
                summary.push_str("; ");
            }
            summary.push_str(&issue.to_string());
        }
        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Station search settings
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Default position to search from when none is given
    #[serde(default)]
    pub home: Option<HomeConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// JSON station catalog; the built-in list is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Matches farther than this are reported as out of range
    #[serde(default)]
    pub max_distance_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl HomeConfig {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("home")
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("firewatch")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            locator: LocatorConfig::default(),
            home: None,
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating the
    /// default file if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate for a search from `origin`, logging warnings and failing on
    /// errors
    pub fn ensure_valid(&self, origin: SearchOrigin) -> Result<ValidationReport, ConfigError> {
        let report = self.validate(origin);

        if !report.is_valid() {
            return Err(ConfigError::Invalid(report.summary()));
        }

        for warning in &report.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok(report)
    }

    /// Check the settings a search from `origin` depends on.
    ///
    /// `[home]` is only checked when the search falls back to it.
    pub fn validate(&self, origin: SearchOrigin) -> ValidationReport {
        let mut report = ValidationReport::default();

        if origin == SearchOrigin::Home {
            match &self.home {
                Some(home) => {
                    if let Err(e) = home.coordinate().validate() {
                        report.error(format!("home.{}", e.field), e.to_string());
                    }
                }
                None => {
                    report.warning(
                        "home",
                        "No home position set - a position must be given for each search",
                    );
                }
            }
        }

        if let Some(path) = &self.locator.catalog_path {
            let catalog_path = PathBuf::from(path);
            if !catalog_path.exists() {
                report.error(
                    "locator.catalog_path",
                    format!("Path does not exist: {}", catalog_path.display()),
                );
            } else if !catalog_path.is_file() {
                report.error(
                    "locator.catalog_path",
                    format!("Path is not a file: {}", catalog_path.display()),
                );
            }
        }

        if let Some(radius) = self.locator.max_distance_km {
            if !radius.is_finite() || radius <= 0.0 {
                report.error(
                    "locator.max_distance_km",
                    format!("Range must be a positive number of kilometres, got {}", radius),
                );
            } else if radius >= MAX_DISTANCE_KM {
                report.warning(
                    "locator.max_distance_km",
                    "Range covers the whole globe and never excludes a station",
                );
            }
        }

        report
    }

    /// Save configuration to an explicit file, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: config_path.display().to_string(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        std::fs::write(config_path, contents).map_err(io_error)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound("user config directory".to_string()))?
            .join("firewatch");

        Ok(config_dir.join("config.toml"))
    }
}
