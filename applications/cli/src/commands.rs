//! Command implementations
//!
//! Each command works against any catalog backend so it can be tested
//! without a server.

use crate::error::{CliError, Result};
use songdeck_catalog::CatalogStore;
use songdeck_core::{Album, CatalogRetrieval, Track};
use songdeck_playback::{
    HeadlessEngine, Navigation, PlaybackConfig, PlaybackEvent, PlaybackSession, TransportState,
};
use tracing::{debug, info};

/// Albums with metadata; empty when the catalog is unreachable
pub async fn list_albums<R: CatalogRetrieval>(store: &CatalogStore<R>) -> Vec<Album> {
    store.load_album_list().await
}

/// Playable tracks of one album, in listing order
pub async fn list_tracks<R: CatalogRetrieval>(store: &CatalogStore<R>, album_id: &str) -> Vec<Track> {
    store.load_tracks(album_id).await
}

/// How `walk` simulates playback
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOptions {
    /// Simulated length of every track (seconds)
    pub track_seconds: f64,

    /// Clock step between time updates (seconds)
    pub step_seconds: f64,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            track_seconds: 3.0,
            step_seconds: 1.0,
        }
    }
}

/// What a walk played
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkReport {
    /// Display names, in play order
    pub played: Vec<String>,

    /// Time labels shown while playing
    pub labels: Vec<String>,

    /// Final transport state
    pub final_state: TransportState,
}

/// Play an album from its first track to the end on a headless engine
///
/// Each ended track is followed by `next()` unless the session advanced on
/// its own; the walk stops when there is no next track.
pub async fn walk<R: CatalogRetrieval>(
    store: &CatalogStore<R>,
    playback: PlaybackConfig,
    album_id: &str,
    options: &WalkOptions,
) -> Result<WalkReport> {
    if !options.track_seconds.is_finite() || options.track_seconds < 0.0 {
        return Err(CliError::Config(format!(
            "track length must be a non-negative number of seconds, got {}",
            options.track_seconds
        )));
    }

    let mut session = PlaybackSession::new(HeadlessEngine::new(), playback);

    session.load_album(store, album_id).await;
    for track in session.tracks() {
        session
            .engine()
            .set_track_duration(track.locator.clone(), options.track_seconds);
    }
    if session.track_count() == 0 {
        return Err(CliError::EmptyAlbum(album_id.to_string()));
    }
    session.start_first_track(true)?;

    let step = options.step_seconds.max(0.001);
    let mut report = WalkReport::default();

    loop {
        if let Some(track) = session.current_track() {
            info!(track = %track.display_name, "Playing");
            report.played.push(track.display_name.clone());
        }

        while session.transport() == TransportState::Playing {
            if session.engine().tick(step) {
                session.on_track_ended()?;
                break;
            }
            if session.on_time_advanced() {
                report.labels.push(session.snapshot().time_label);
            }
        }
        log_events(session.drain_events());

        match session.transport() {
            // auto_advance already started the next track
            TransportState::Playing => continue,
            TransportState::Ended => {
                if session.next()? == Navigation::NoMovement {
                    break;
                }
            }
            TransportState::Idle | TransportState::Paused => break,
        }
    }

    log_events(session.drain_events());
    report.final_state = session.transport();
    Ok(report)
}

fn log_events(events: Vec<PlaybackEvent>) {
    for event in events {
        debug!(?event, "Session event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_walk_options() {
        let options = WalkOptions::default();
        assert_eq!(options.track_seconds, 3.0);
        assert_eq!(options.step_seconds, 1.0);
    }
}
