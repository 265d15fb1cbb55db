//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportState {
    /// No track selected (initial state, and after every album load)
    #[default]
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track, or cued without autoplay
    Paused,

    /// Reached the end of the track
    Ended,
}

/// Configuration for the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,

    /// Volume restored by unmute when no earlier level was recorded (default: 0.1)
    #[serde(default = "default_unmute_volume")]
    pub unmute_volume: f64,

    /// Start the next track when one ends (default: false)
    #[serde(default)]
    pub auto_advance: bool,

    /// Album cued (paused on its first track) at startup (default: "BGM")
    #[serde(default = "default_album")]
    pub default_album: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            unmute_volume: default_unmute_volume(),
            auto_advance: false,
            default_album: default_album(),
        }
    }
}

fn default_initial_volume() -> f64 {
    1.0
}

fn default_unmute_volume() -> f64 {
    0.1
}

fn default_album() -> String {
    "BGM".to_string()
}

/// Outcome of opening an album from its card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbumOpened {
    /// The album has no playable tracks; nothing was selected
    Empty,

    /// First track selected and playing
    Started { track_count: usize },

    /// First track selected and paused
    Cued { track_count: usize },
}

/// Render model for the UI binding layer
///
/// A pure function of session state; re-rendering from it is always safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub album_id: Option<String>,
    pub track_count: usize,
    pub track_index: Option<usize>,
    pub track_name: Option<String>,
    pub transport: TransportState,
    pub volume: f64,
    pub muted: bool,
    /// Elapsed time, `mm:ss`
    pub elapsed: String,
    /// Total duration, `mm:ss` (`00:00` while unknown)
    pub total: String,
    /// `"mm:ss / mm:ss"`
    pub time_label: String,
    /// Seek bar position in [0, 1]
    pub seek_fraction: f64,
    pub has_next: bool,
    pub has_previous: bool,
}
