// Infrastructure layer: file formats, configuration, logging

pub mod catalog_loader;
pub mod config;
pub mod logging;

pub use catalog_loader::{load_catalog, load_catalog_from_reader, CatalogError};
pub use config::{AppConfig, ConfigError, SolverSettings};
pub use logging::LoggingConfig;
