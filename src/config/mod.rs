use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use serde::{Deserialize, Serialize};
use url::Url;

/// The public API origin of the Feedly cloud service.
pub const DEFAULT_BASE_URL: &str = "https://cloud.feedly.com";

/// Seconds to wait for a response before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration file for the Feedly CLI. Every key is optional in the file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// The origin every request path is appended to.
    pub base_url: Url,
    /// Request timeout in seconds. `None` or `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Creates a config pointing at a different origin, e.g. a local mock server.
    pub fn with_base_url(base_url: Url) -> Config {
        Config {
            base_url,
            ..Config::default()
        }
    }

    /// The timeout to give the http client, if any.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    /// Writes out the config file to the specified path. Will create intermediate directories if
    /// necessary.
    pub fn write_out(&self, config_file: &Path) -> Result<()> {
        if config_file.is_dir() {
            return Err(anyhow!("File path {:?} is existing directory, not file.", config_file));
        }

        if let Some(config_dir) = config_file.parent() {
            std::fs::create_dir_all(config_dir)
                .with_context(|| format!("Unable to create config dir: {:?}", config_dir))?;
        }

        let cfg_file_data = toml::to_string(&self)
            .context("Could not serialize config to toml.")?;

        std::fs::write(config_file, cfg_file_data)
            .with_context(|| format!("Could not write config data to file: {:?}", config_file))?;

        Ok(())
    }

    /// Opens the given configuration file, or returns the default configuration if None is
    /// passed. Nothing is read from disk unless a path is given.
    pub fn open(config_file: Option<&Path>) -> Result<Config> {
        let config_file = match config_file {
            Some(path) => path,
            None => return Ok(Config::default()),
        };

        let config_data = std::fs::read_to_string(config_file)
            .with_context(|| format!("Failed to open config file: {:?}", config_file))?;

        toml::from_str(&config_data)
            .with_context(|| format!("Failed to read config file: {:?}", config_file))
    }
}
