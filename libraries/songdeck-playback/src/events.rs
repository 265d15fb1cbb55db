//! Playback Events
//!
//! Event-based communication for UI synchronization. The session queues an
//! event at every observable change; the binding layer drains the queue and
//! re-renders from a snapshot.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new album became active (selection cleared)
    AlbumLoaded {
        album_id: String,
        track_count: usize,
    },

    /// Current track changed
    TrackChanged {
        /// Index within the active album
        index: usize,
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Transport state changed (playing, paused, ended)
    TransportChanged { state: TransportState },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        volume: f64,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Displayed clock changed
    PositionChanged {
        /// Elapsed seconds
        elapsed: f64,
        /// Total seconds, if known
        total: Option<f64>,
        /// Seek bar position in [0, 1]
        fraction: f64,
    },

    /// Track finished playing naturally (reached end)
    TrackEnded { track_id: String },

    /// Media engine rejected a command
    Error { message: String },
}

impl PlaybackEvent {
    /// Whether this event changes what the track list highlights
    pub fn affects_track_list(&self) -> bool {
        matches!(
            self,
            PlaybackEvent::AlbumLoaded { .. } | PlaybackEvent::TrackChanged { .. }
        )
    }
}
