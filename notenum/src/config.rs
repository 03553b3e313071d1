//! Optional user configuration.
//!
//! Settings live in a small TOML file, by default
//! `<config dir>/notenum/config.toml`. Every key is optional and command-line
//! flags take precedence over anything read here.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "notenum";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Vault root directory.
    pub vault: Option<PathBuf>,
    /// Extension used for created notes, without the leading dot.
    pub extension: String,
    /// List dot-files and dot-directories when scanning the vault.
    pub include_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault: None,
            extension: DEFAULT_EXTENSION.to_string(),
            include_hidden: false,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse notenum config TOML")
    }

    /// Load a config from an explicit path. The file must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("unable to read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&contents).with_context(|| format!("in config file '{}'", path.display()))?;
        info!("loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, otherwise the default config file if present.
    ///
    /// A missing default file simply yields [`Config::default`].
    ///
    /// # Errors
    /// Returns an error if a config file exists (or was requested) but cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            other => {
                debug!("no config file found (looked for {other:?}); using defaults");
                Ok(Self::default())
            },
        }
    }
}

/// Location of the default config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
