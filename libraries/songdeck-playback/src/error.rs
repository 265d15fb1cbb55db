//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    /// Selection outside the active album's track list
    ///
    /// A caller contract violation: the session rejects it rather than clamping.
    #[error("Track index {index} out of range (album has {len} tracks)")]
    OutOfRange { index: usize, len: usize },

    /// Media engine refused a command
    #[error("Media engine error: {0}")]
    Engine(String),
}

impl PlaybackError {
    /// Create a media engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
