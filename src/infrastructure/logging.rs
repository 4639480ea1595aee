//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats understood by [`LoggingConfig::init`]
pub const LOG_FORMATS: [&str; 4] = ["pretty", "full", "compact", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if LOG_FORMATS.contains(&self.format.as_str()) {
            Ok(())
        } else {
            Err(format!(
                "unknown format '{}' (expected one of {})",
                self.format,
                LOG_FORMATS.join(", ")
            ))
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Events go to
    /// stderr so stdout carries only the report.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        let _ = match self.format.as_str() {
            "json" => builder.json().try_init(),
            "compact" => builder.compact().try_init(),
            "pretty" => builder.pretty().try_init(),
            _ => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats_accepted() {
        for format in LOG_FORMATS {
            let config = LoggingConfig {
                format: format.to_string(),
                ..LoggingConfig::default()
            };
            assert!(config.validate().is_ok(), "{format}");
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            format: "xml".into(),
            ..LoggingConfig::default()
        };
        let reason = config.validate().unwrap_err();
        assert!(reason.contains("'xml'"));
    }
}
