/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use songdeck_catalog::{CatalogSettings, CatalogStrategy};
use songdeck_playback::PlaybackConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "songdeck.toml";

/// Prefix of environment overrides, e.g. `SONGDECK_CATALOG__BASE_URL`
pub const ENV_PREFIX: &str = "SONGDECK";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `songdeck.toml` is read if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](Self::load), with environment variables taken from
    /// `env` instead of the process when given
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (SONGDECK_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("catalog.playable_extensions")
                .try_parsing(true)
                .source(env),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.catalog.base_url).map_err(|e| {
            CliError::Config(format!(
                "Invalid catalog.base_url '{}': {}",
                self.catalog.base_url, e
            ))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CliError::Config(format!(
                "catalog.base_url must be http or https, got '{}'",
                base.scheme()
            )));
        }

        if self.catalog.playable_extensions.is_empty() {
            return Err(CliError::Config(
                "catalog.playable_extensions must list at least one extension".to_string(),
            ));
        }

        if self.catalog.strategy == CatalogStrategy::Manifest
            && self.catalog.manifest_path.trim().is_empty()
        {
            return Err(CliError::Config(
                "catalog.manifest_path is required for the manifest strategy".to_string(),
            ));
        }

        if self.catalog.request_timeout_secs == 0 {
            return Err(CliError::Config(
                "catalog.request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.playback.initial_volume) {
            return Err(CliError::Config(format!(
                "playback.initial_volume must be within 0.0-1.0, got {}",
                self.playback.initial_volume
            )));
        }

        let unmute = self.playback.unmute_volume;
        if unmute.is_nan() || unmute <= 0.0 || unmute > 1.0 {
            return Err(CliError::Config(format!(
                "playback.unmute_volume must be within (0.0, 1.0], got {}",
                unmute
            )));
        }

        Ok(())
    }
}
