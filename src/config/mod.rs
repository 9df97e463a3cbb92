use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::logging::LoggingConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub conversion: ConversionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Allow row-parallel execution for large rasters.
    pub parallel: bool,
    /// Smallest pixel count that is worth splitting across threads.
    pub parallel_min_pixels: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_min_pixels: 65_536,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> anyhow::Result<()> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.conversion.parallel_min_pixels == 0 {
            errors.push("conversion parallel_min_pixels must be positive".to_string());
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Json,
    Toml,
}

pub fn load_config_or_default(config_path: Option<&str>) -> Config {
    match config_path {
        Some(path) => {
            match Config::load_from_file(path) {
                Ok(config) => {
                    if let Err(errors) = config.validate() {
                        eprintln!("Configuration validation errors:");
                        for error in errors {
                            eprintln!("  - {}", error);
                        }
                        eprintln!("Using default configuration instead.");
                        Config::default()
                    } else {
                        config
                    }
                }
                Err(e) => {
                    eprintln!("Failed to load config from '{}': {}", path, e);
                    eprintln!("Using default configuration.");
                    Config::default()
                }
            }
        }
        None => Config::default(),
    }
}
