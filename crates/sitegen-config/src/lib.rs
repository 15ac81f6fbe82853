//! Configuration for the website generator.
//!
//! Parses `sitegen.toml` configuration files with serde and falls back to
//! defaults when no file is present. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! The preview switch is the single environment flag altering generation:
//! it admits draft content and enables the `preview` version sentinel.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use sitegen_content::Locale;

/// Configuration filename searched in the working directory.
const CONFIG_FILENAME: &str = "sitegen.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override preview mode.
    pub preview: Option<bool>,
    /// Override the version designated as newest.
    pub newest_version: Option<String>,
    /// Override the search-index artifact location.
    pub search_index_path: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site-wide generation settings.
    pub site: SiteConfig,
    /// Locale settings.
    pub locales: LocalesConfig,
    /// Search-index settings.
    pub search: SearchConfig,
}

/// Site-wide generation settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Version currently designated as newest; its docs get unversioned
    /// alias routes.
    pub newest_version: String,
    /// Known doc versions, newest first.
    pub versions: Vec<String>,
    /// Include preview content and the preview version sentinel.
    pub preview: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            newest_version: "master".to_owned(),
            versions: Vec::new(),
            preview: false,
        }
    }
}

/// Locale settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalesConfig {
    /// Locale that omits its path prefix.
    pub default: Locale,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: Locale::En,
        }
    }
}

/// Search-index settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Search-index artifact location.
    pub index_path: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("src/search.json"),
        }
    }
}

impl Config {
    /// Load configuration, applying CLI overrides.
    ///
    /// An explicit `path` must exist; with `path == None` the default
    /// filename is tried in the working directory and missing files fall
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on missing explicit files, I/O or parse
    /// failures, or invalid settings.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML file.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(preview) = cli.preview {
            self.site.preview = preview;
        }
        if let Some(newest_version) = &cli.newest_version {
            self.site.newest_version = newest_version.clone();
        }
        if let Some(index_path) = &cli.search_index_path {
            self.search.index_path = index_path.clone();
        }
    }

    /// Validate resolved settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.site.newest_version.is_empty() {
            return Err(ConfigError::Validation(
                "site.newest_version must not be empty".to_owned(),
            ));
        }
        if !self.site.versions.is_empty()
            && self.site.newest_version != "master"
            && !self.site.versions.contains(&self.site.newest_version)
        {
            return Err(ConfigError::Validation(format!(
                "site.newest_version {:?} is not listed in site.versions",
                self.site.newest_version
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
