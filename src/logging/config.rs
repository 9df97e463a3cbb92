//! Logging configuration
//!
//! Configuration options for the logging system, including per-component
//! log levels and output destinations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub global_level: String,

    /// Enable console output
    pub console_output: bool,

    /// Directory for log files (None = no file logging)
    pub log_directory: Option<PathBuf>,

    /// Include file location in logs (impacts performance)
    pub include_file_location: bool,

    /// Conversion pass log level
    pub conversion_level: String,

    /// Input validation log level
    pub validation_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: "info".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: false,
            conversion_level: "info".to_string(),
            validation_level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Create a development configuration with verbose logging
    pub fn development() -> Self {
        Self {
            global_level: "debug".to_string(),
            console_output: true,
            log_directory: Some(PathBuf::from("logs")),
            include_file_location: true,
            conversion_level: "trace".to_string(),
            validation_level: "debug".to_string(),
        }
    }

    /// Create a production configuration with minimal overhead
    pub fn production() -> Self {
        Self {
            global_level: "warn".to_string(),
            console_output: false,
            log_directory: Some(PathBuf::from("/var/log/image-grayscale")),
            include_file_location: false,
            conversion_level: "info".to_string(),
            validation_level: "info".to_string(),
        }
    }

    /// Validate the configuration and provide helpful error messages
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];

        if !valid_levels.contains(&self.global_level.as_str()) {
            return Err(format!(
                "Invalid global_level: {}. Must be one of: {:?}",
                self.global_level, valid_levels
            ));
        }

        if !valid_levels.contains(&self.conversion_level.as_str()) {
            return Err(format!(
                "Invalid conversion_level: {}. Must be one of: {:?}",
                self.conversion_level, valid_levels
            ));
        }

        if !valid_levels.contains(&self.validation_level.as_str()) {
            return Err(format!(
                "Invalid validation_level: {}. Must be one of: {:?}",
                self.validation_level, valid_levels
            ));
        }

        if let Some(ref log_dir) = self.log_directory {
            if let Some(parent) = log_dir.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(format!("Log directory parent does not exist: {:?}", parent));
                }
            }
        }

        Ok(())
    }

    /// Get the effective log level for a specific component
    pub fn get_component_level(&self, component: &str) -> &str {
        match component {
            "conversion" | "convert" => &self.conversion_level,
            "validation" | "raster" => &self.validation_level,
            _ => &self.global_level,
        }
    }
}
