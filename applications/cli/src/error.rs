/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] songdeck_core::CatalogError),

    #[error("Playback error: {0}")]
    Playback(#[from] songdeck_playback::PlaybackError),

    #[error("Album '{0}' has no playable tracks")]
    EmptyAlbum(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
