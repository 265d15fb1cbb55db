//! Songdeck - Playback Session
//!
//! Platform-agnostic playback control for Songdeck.
//!
//! This crate provides:
//! - The playback session (active album, current track, transport state)
//! - Navigation policy (next/previous/select, no wraparound)
//! - Time sync (`mm:ss` labels and seek bar fraction)
//! - Volume control (0.0-1.0, mute/unmute with restore)
//! - Change events and a serialisable snapshot for the UI
//!
//! # Architecture
//!
//! `songdeck-playback` never decodes audio. It commands a [`MediaEngine`]
//! (an `HTMLAudioElement` in the browser, [`HeadlessEngine`] elsewhere) and
//! reads albums through a [`songdeck_catalog::CatalogStore`].
//!
//! The engine's clock and end-of-track notifications arrive as calls to
//! [`PlaybackSession::on_time_advanced`] and [`PlaybackSession::on_track_ended`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use songdeck_core::Track;
//! use songdeck_playback::{HeadlessEngine, PlaybackConfig, PlaybackSession, TransportState};
//!
//! let mut session = PlaybackSession::new(HeadlessEngine::new(), PlaybackConfig::default());
//!
//! let tracks = vec![
//!     Track::from_file_name("intro.mp3", "/songs/BGM/intro.mp3"),
//!     Track::from_file_name("theme.mp3", "/songs/BGM/theme.mp3"),
//! ];
//! session.install_album("BGM", tracks);
//!
//! session.select_track(0, true).unwrap();
//! session.next().unwrap();
//! assert_eq!(session.active_track_index(), Some(1));
//! assert_eq!(session.transport(), TransportState::Playing);
//!
//! // Already at the last track: nothing happens
//! session.next().unwrap();
//! assert_eq!(session.active_track_index(), Some(1));
//! ```
//!
//! # Example: Volume
//!
//! ```rust
//! use songdeck_playback::{HeadlessEngine, PlaybackSession};
//!
//! let mut session = PlaybackSession::new(HeadlessEngine::new(), Default::default());
//! session.set_volume_percent(80).unwrap();
//! session.toggle_mute().unwrap();
//! assert_eq!(session.volume(), 0.0);
//! session.toggle_mute().unwrap();
//! assert_eq!(session.volume(), 0.8);
//! ```

mod engine;
mod error;
mod events;
pub mod navigation;
mod session;
pub mod time_sync;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use engine::{EngineCommand, HeadlessEngine, MediaEngine};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use navigation::{compute_adjacent_index, resolve, Direction, Navigation, NavigationCommand};
pub use session::PlaybackSession;
pub use time_sync::{format_duration, format_time, fraction_elapsed, time_label, PlaybackClock};
pub use types::{AlbumOpened, PlaybackConfig, SessionSnapshot, TransportState};
pub use volume::Volume;
