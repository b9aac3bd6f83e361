use firewatch_locator::{
    Coordinate, FixedPosition, PositionSource, StationCatalog, StationMatch,
};
use std::path::Path;

use crate::config::LocatorConfig;
use crate::error::{AppError, ConfigError};
use crate::Config;

/// Application state: validated config plus the station catalog it names
pub struct App {
    config: Config,
    catalog: StationCatalog,
}

impl App {
    /// Create an application from an already-loaded config
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let catalog = load_catalog(&config.locator)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create an application around a caller-supplied catalog
    pub fn with_catalog(config: Config, catalog: StationCatalog) -> Self {
        if catalog.is_empty() {
            tracing::warn!("Station catalog is empty; every search will come back empty");
        }
        Self { config, catalog }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// Nearest station to an explicit position
    pub fn nearest_to(&self, query: Coordinate) -> Result<Option<StationMatch>, AppError> {
        let nearest = self.catalog.nearest(query)?;

        match &nearest {
            Some(m) => tracing::info!(
                "Nearest fire station to {} is {} ({})",
                query,
                m.payload().name,
                m.distance_label()
            ),
            None => tracing::info!("No fire stations to search near {}", query),
        }

        Ok(nearest)
    }

    /// Ask `source` where we are, then search from there
    pub fn nearest_from(
        &self,
        source: &dyn PositionSource,
    ) -> Result<Option<StationMatch>, AppError> {
        let position = source.current_position().map_err(|e| {
            tracing::warn!("Position source {} failed: {}", source.name(), e);
            e
        })?;
        tracing::debug!("Position from {}: {}", source.name(), position);

        self.nearest_to(position)
    }

    /// Configured home position, if any
    pub fn home_position(&self) -> Option<FixedPosition> {
        self.config
            .home
            .as_ref()
            .map(|home| FixedPosition::new(home.label(), home.coordinate()))
    }

    /// Search from the configured home position
    pub fn nearest_to_home(&self) -> Result<Option<StationMatch>, AppError> {
        let home = self
            .home_position()
            .ok_or_else(|| ConfigError::MissingSetting("home".to_string()))?;
        self.nearest_from(&home)
    }

    /// True if the match lies within the configured range (always true
    /// when no range is set)
    pub fn within_range(&self, m: &StationMatch) -> bool {
        self.config
            .locator
            .max_distance_km
            .map_or(true, |limit| m.distance_km <= limit)
    }
}

fn load_catalog(locator: &LocatorConfig) -> Result<StationCatalog, AppError> {
    let catalog = match &locator.catalog_path {
        Some(path) => {
            let catalog = StationCatalog::from_json_file(Path::new(path))?;
            tracing::info!("Loaded {} fire stations from {}", catalog.len(), path);
            catalog
        }
        None => {
            let catalog = StationCatalog::builtin();
            tracing::info!("Using built-in catalog of {} fire stations", catalog.len());
            catalog
        }
    };

    Ok(catalog)
}
