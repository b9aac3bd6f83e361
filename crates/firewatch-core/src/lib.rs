pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{
    Config, ConfigIssue, HomeConfig, LocatorConfig, SearchOrigin, ValidationReport,
};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize logging for the application
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Firewatch core initialized");
    Ok(())
}
