//! Configuration management module.
//!
//! This module handles loading the application configuration: the log level
//! and the settings of the service that receives contact messages.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/portfolio";

/// Specifying which service receives contact messages.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    #[default]
    Simulated,
    Webhook,
}

/// Settings for the contact message delivery.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
    pub kind: DeliveryKind,
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
    pub simulated_delay_ms: u64,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        DeliverySettings {
            kind: DeliveryKind::Simulated,
            endpoint: None,
            timeout_secs: 10,
            max_retries: 2,
            backoff_ms: 250,
            simulated_delay_ms: 2000,
        }
    }
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub delivery: DeliverySettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Oversees the configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: LevelFilter,
    pub delivery: DeliverySettings,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            log_level: LevelFilter::Info,
            delivery: DeliverySettings::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided, or the default one otherwise. A missing file
    /// leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            self.apply_yaml(&contents)?;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Overwrite settings with the ones in the YAML document.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.log_level = LevelFilter::from_str(&data.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(data.log_level.clone()))?;
        self.delivery = data.delivery;
        Ok(())
    }

    /// Return the path of the configuration file once `load` has run.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the configured webhook endpoint or an error if unset.
    ///
    pub fn webhook_endpoint(&self) -> Result<&str, ConfigError> {
        self.delivery
            .endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or(ConfigError::EndpointNotSet)
    }

    /// Returns the path buffer for the default configuration directory
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
