//! Playback session - core orchestration
//!
//! Owns the active album, the current track pointer, transport state and
//! volume, and is the only component that commands the media engine.

use crate::{
    engine::MediaEngine,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    navigation::{compute_adjacent_index, resolve, Direction, Navigation, NavigationCommand},
    time_sync::{known_duration, PlaybackClock},
    types::{AlbumOpened, PlaybackConfig, SessionSnapshot, TransportState},
    volume::Volume,
};
use songdeck_catalog::CatalogStore;
use songdeck_core::{CatalogRetrieval, Track};
use tracing::{debug, info, warn};

/// Album whose tracks the session navigates
#[derive(Debug, Clone)]
struct ActiveAlbum {
    id: String,
    tracks: Vec<Track>,
}

/// Playback session
///
/// Invariant: a track is selected iff transport is not `Idle`.
pub struct PlaybackSession<E: MediaEngine> {
    engine: E,
    config: PlaybackConfig,

    album: Option<ActiveAlbum>,
    track_index: Option<usize>,
    transport: TransportState,

    volume: Volume,
    clock: PlaybackClock,

    /// Set when a track ends, cleared by a seek; play from `Ended` rewinds
    /// only while set
    rewind_on_play: bool,

    events: Vec<PlaybackEvent>,
}

impl<E: MediaEngine> PlaybackSession<E> {
    /// Create a session owning `engine`
    ///
    /// The configured initial volume is pushed to the engine right away.
    pub fn new(engine: E, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.initial_volume, config.unmute_volume);
        if let Err(e) = engine.set_volume(volume.level()) {
            warn!(error = %e, "Media engine rejected initial volume");
        }

        Self {
            engine,
            config,
            album: None,
            track_index: None,
            transport: TransportState::Idle,
            volume,
            clock: PlaybackClock::default(),
            rewind_on_play: false,
            events: Vec::new(),
        }
    }

    // ===== Album loading =====

    /// Make `album_id` the active album with its tracks from `catalog`
    ///
    /// Clears the selection and returns to `Idle`; never starts playback.
    /// Returns the number of playable tracks (0 if retrieval failed).
    pub async fn load_album<R: CatalogRetrieval>(
        &mut self,
        catalog: &CatalogStore<R>,
        album_id: &str,
    ) -> usize {
        let tracks = catalog.load_tracks(album_id).await;
        self.install_album(album_id, tracks)
    }

    /// Activate an album whose tracks were already fetched
    ///
    /// Concurrent loads are not queued: the last install wins.
    pub fn install_album(&mut self, album_id: impl Into<String>, tracks: Vec<Track>) -> usize {
        let album_id = album_id.into();
        let track_count = tracks.len();

        if self.transport == TransportState::Playing {
            if let Err(e) = self.engine.pause() {
                warn!(error = %e, "Could not pause before switching album");
            }
        }

        info!(album = %album_id, tracks = track_count, "Album loaded");
        self.album = Some(ActiveAlbum {
            id: album_id.clone(),
            tracks,
        });
        self.track_index = None;
        self.clock.reset();
        self.events.push(PlaybackEvent::AlbumLoaded {
            album_id,
            track_count,
        });
        self.set_transport(TransportState::Idle);
        track_count
    }

    /// Load an album and start its first track (album card click)
    pub async fn open_album<R: CatalogRetrieval>(
        &mut self,
        catalog: &CatalogStore<R>,
        album_id: &str,
    ) -> Result<AlbumOpened> {
        self.load_album(catalog, album_id).await;
        self.start_first_track(true)
    }

    /// Load the configured default album and cue its first track paused
    pub async fn cue_default_album<R: CatalogRetrieval>(
        &mut self,
        catalog: &CatalogStore<R>,
    ) -> Result<AlbumOpened> {
        let album_id = self.config.default_album.clone();
        self.load_album(catalog, &album_id).await;
        self.start_first_track(false)
    }

    /// Select track 0 of the active album, if it has one
    pub fn start_first_track(&mut self, autoplay: bool) -> Result<AlbumOpened> {
        let track_count = self.track_count();
        if track_count == 0 {
            debug!(album = ?self.active_album_id(), "Album has no playable tracks");
            return Ok(AlbumOpened::Empty);
        }

        self.select_track(0, autoplay)?;
        Ok(if autoplay {
            AlbumOpened::Started { track_count }
        } else {
            AlbumOpened::Cued { track_count }
        })
    }

    // ===== Navigation =====

    /// Load the track at `index` into the engine
    ///
    /// Plays it if `autoplay`, otherwise leaves it paused at 0:00.
    ///
    /// # Errors
    /// `OutOfRange` if `index` is not a row of the active album (state is
    /// left untouched); `Engine` if the media engine refuses the source.
    pub fn select_track(&mut self, index: usize, autoplay: bool) -> Result<()> {
        match resolve(
            NavigationCommand::Select(index),
            self.track_index,
            self.track_count(),
        )? {
            Navigation::MoveTo(index) => self.move_to(index, autoplay),
            Navigation::NoMovement => Ok(()),
        }
    }

    /// Skip to the next track
    ///
    /// At the last track (or with nothing selected) this is a no-op.
    pub fn next(&mut self) -> Result<Navigation> {
        self.step(Direction::Next)
    }

    /// Go back to the previous track
    ///
    /// At the first track (or with nothing selected) this is a no-op.
    pub fn previous(&mut self) -> Result<Navigation> {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> Result<Navigation> {
        let navigation = compute_adjacent_index(self.track_index, self.track_count(), direction);
        match navigation {
            Navigation::MoveTo(index) => self.move_to(index, true)?,
            Navigation::NoMovement => {
                debug!(?direction, index = ?self.track_index, "No track to move to");
            }
        }
        Ok(navigation)
    }

    fn move_to(&mut self, index: usize, autoplay: bool) -> Result<()> {
        let Some(track) = self.track_at(index).cloned() else {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.track_count(),
            });
        };

        self.engine
            .load(&track.locator)
            .map_err(|e| self.engine_failed(e))?;

        let previous_track_id = self.current_track().map(|t| t.id.clone());
        self.track_index = Some(index);
        self.clock.reset();
        debug!(index, track = %track.id, autoplay, "Track selected");
        self.events.push(PlaybackEvent::TrackChanged {
            index,
            track_id: track.id,
            previous_track_id,
        });
        self.push_position();

        if autoplay {
            if let Err(e) = self.engine.play() {
                self.set_transport(TransportState::Paused);
                return Err(self.engine_failed(e));
            }
            self.set_transport(TransportState::Playing);
        } else {
            self.set_transport(TransportState::Paused);
        }
        Ok(())
    }

    // ===== Transport =====

    /// Play/pause button
    ///
    /// Playing pauses, Paused resumes, Ended restarts from 0:00. Idle does
    /// nothing.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.transport {
            TransportState::Idle => Ok(()),
            TransportState::Playing => {
                self.engine.pause().map_err(|e| self.engine_failed(e))?;
                self.set_transport(TransportState::Paused);
                Ok(())
            }
            TransportState::Paused => {
                self.engine.play().map_err(|e| self.engine_failed(e))?;
                self.set_transport(TransportState::Playing);
                Ok(())
            }
            TransportState::Ended => {
                if self.rewind_on_play {
                    self.engine.seek_to(0.0).map_err(|e| self.engine_failed(e))?;
                    self.clock.rewind();
                    self.push_position();
                }
                self.engine.play().map_err(|e| self.engine_failed(e))?;
                self.rewind_on_play = false;
                self.set_transport(TransportState::Playing);
                Ok(())
            }
        }
    }

    /// Seek to a fraction (0.0-1.0) of the current track
    ///
    /// Returns `Ok(false)` without touching the engine while the duration
    /// is unknown.
    pub fn seek(&mut self, fraction: f64) -> Result<bool> {
        if fraction.is_nan() || self.transport == TransportState::Idle {
            return Ok(false);
        }
        let Some(total) = known_duration(self.engine.duration()) else {
            debug!("Seek ignored, duration unknown");
            return Ok(false);
        };

        let position = fraction.clamp(0.0, 1.0) * total;
        self.engine
            .seek_to(position)
            .map_err(|e| self.engine_failed(e))?;
        self.clock.update(position, Some(total));
        self.push_position();
        self.rewind_on_play = false;
        Ok(true)
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0, clamped)
    ///
    /// A level above zero also unmutes. NaN is ignored.
    pub fn set_volume(&mut self, level: f64) -> Result<()> {
        let mut volume = self.volume.clone();
        if !volume.set_level(level) {
            return Ok(());
        }
        self.apply_volume(volume)
    }

    /// Set volume from the 0-100 slider
    pub fn set_volume_percent(&mut self, percent: u8) -> Result<()> {
        let mut volume = self.volume.clone();
        volume.set_percent(percent);
        self.apply_volume(volume)
    }

    /// Mute, or unmute back to the remembered level
    pub fn toggle_mute(&mut self) -> Result<()> {
        let mut volume = self.volume.clone();
        volume.toggle_mute();
        self.apply_volume(volume)
    }

    fn apply_volume(&mut self, volume: Volume) -> Result<()> {
        self.engine
            .set_volume(volume.level())
            .map_err(|e| self.engine_failed(e))?;
        self.volume = volume;
        self.events.push(PlaybackEvent::VolumeChanged {
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
        Ok(())
    }

    // ===== Engine notifications =====

    /// Engine clock advanced
    ///
    /// Returns true if the displayed time changed. Ignored while `Idle` and
    /// while `Ended`, where the display stays at 00:00 until the next play or
    /// seek.
    pub fn on_time_advanced(&mut self) -> bool {
        if matches!(self.transport, TransportState::Idle | TransportState::Ended) {
            return false;
        }

        let changed = self
            .clock
            .update(self.engine.current_time(), self.engine.duration());
        if changed {
            self.push_position();
        }
        changed
    }

    /// Engine reached the end of the current track
    ///
    /// Resets the clock to 0:00 and moves to `Ended`. Starts the next track
    /// only when `auto_advance` is configured.
    pub fn on_track_ended(&mut self) -> Result<()> {
        let Some(track) = self.current_track() else {
            return Ok(());
        };
        let track_id = track.id.clone();

        debug!(track = %track_id, "Track ended");
        self.clock.rewind();
        self.rewind_on_play = true;
        self.events.push(PlaybackEvent::TrackEnded { track_id });
        self.push_position();
        self.set_transport(TransportState::Ended);

        let command = NavigationCommand::TrackEnded {
            auto_advance: self.config.auto_advance,
        };
        match resolve(command, self.track_index, self.track_count())? {
            Navigation::MoveTo(index) => self.move_to(index, true),
            Navigation::NoMovement => Ok(()),
        }
    }

    // ===== Getters =====

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn active_album_id(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.id.as_str())
    }

    /// Tracks of the active album (empty if none)
    pub fn tracks(&self) -> &[Track] {
        self.album.as_ref().map_or(&[], |a| a.tracks.as_slice())
    }

    pub fn track_count(&self) -> usize {
        self.tracks().len()
    }

    pub fn active_track_index(&self) -> Option<usize> {
        self.track_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.track_index.and_then(|i| self.track_at(i))
    }

    fn track_at(&self, index: usize) -> Option<&Track> {
        self.tracks().get(index)
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    /// Volume level (0.0-1.0)
    pub fn volume(&self) -> f64 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Level unmute will restore
    pub fn pre_mute_volume(&self) -> f64 {
        self.volume.pre_mute_level()
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn has_next(&self) -> bool {
        matches!(
            compute_adjacent_index(self.track_index, self.track_count(), Direction::Next),
            Navigation::MoveTo(_)
        )
    }

    pub fn has_previous(&self) -> bool {
        matches!(
            compute_adjacent_index(self.track_index, self.track_count(), Direction::Previous),
            Navigation::MoveTo(_)
        )
    }

    /// Render model for the UI
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            album_id: self.active_album_id().map(str::to_string),
            track_count: self.track_count(),
            track_index: self.track_index,
            track_name: self.current_track().map(|t| t.display_name.clone()),
            transport: self.transport,
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            elapsed: self.clock.elapsed_label(),
            total: self.clock.total_label(),
            time_label: self.clock.label(),
            seek_fraction: self.clock.fraction(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== Internal =====

    fn set_transport(&mut self, state: TransportState) {
        if self.transport != state {
            self.transport = state;
            self.events.push(PlaybackEvent::TransportChanged { state });
        }
    }

    fn push_position(&mut self) {
        self.events.push(PlaybackEvent::PositionChanged {
            elapsed: self.clock.elapsed(),
            total: self.clock.total(),
            fraction: self.clock.fraction(),
        });
    }

    fn engine_failed(&mut self, error: PlaybackError) -> PlaybackError {
        warn!(error = %error, "Media engine command failed");
        self.events.push(PlaybackEvent::Error {
            message: error.to_string(),
        });
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineCommand, HeadlessEngine};

    fn tracks(names: &[&str]) -> Vec<Track> {
        names
            .iter()
            .map(|n| Track::from_file_name(*n, format!("http://host/songs/BGM/{n}")))
            .collect()
    }

    fn session_with(names: &[&str]) -> PlaybackSession<HeadlessEngine> {
        let mut session = PlaybackSession::new(HeadlessEngine::new(), PlaybackConfig::default());
        session.install_album("BGM", tracks(names));
        session.engine().take_commands();
        session.drain_events();
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = PlaybackSession::new(HeadlessEngine::new(), PlaybackConfig::default());
        assert_eq!(session.transport(), TransportState::Idle);
        assert_eq!(session.active_track_index(), None);
        assert_eq!(session.active_album_id(), None);
        assert_eq!(session.volume(), 1.0);
        assert_eq!(session.engine().commands(), vec![EngineCommand::Volume(1.0)]);
    }

    #[test]
    fn select_track_loads_and_plays() {
        let mut session = session_with(&["a.mp3", "b.mp3"]);
        session.select_track(1, true).unwrap();

        assert_eq!(session.active_track_index(), Some(1));
        assert_eq!(session.transport(), TransportState::Playing);
        assert_eq!(
            session.engine().take_commands(),
            vec![
                EngineCommand::Load("http://host/songs/BGM/b.mp3".to_string()),
                EngineCommand::Play,
            ]
        );
    }

    #[test]
    fn select_without_autoplay_cues_paused() {
        let mut session = session_with(&["a.mp3"]);
        session.select_track(0, false).unwrap();

        assert_eq!(session.transport(), TransportState::Paused);
        assert!(!session.engine().is_playing());
    }

    #[test]
    fn select_out_of_range_leaves_state_untouched() {
        let mut session = session_with(&["a.mp3", "b.mp3"]);
        session.select_track(0, true).unwrap();
        session.engine().take_commands();

        let err = session.select_track(2, true).unwrap_err();
        assert_eq!(err, PlaybackError::OutOfRange { index: 2, len: 2 });
        assert_eq!(session.active_track_index(), Some(0));
        assert_eq!(session.transport(), TransportState::Playing);
        assert!(session.engine().commands().is_empty());
    }

    #[test]
    fn select_with_no_album_is_out_of_range() {
        let mut session = PlaybackSession::new(HeadlessEngine::new(), PlaybackConfig::default());
        assert_eq!(
            session.select_track(0, true),
            Err(PlaybackError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn edges_are_no_ops() {
        let mut session = session_with(&["a.mp3", "b.mp3"]);
        session.select_track(0, true).unwrap();
        session.engine().take_commands();
        session.drain_events();

        assert_eq!(session.previous(), Ok(Navigation::NoMovement));
        assert_eq!(session.next(), Ok(Navigation::MoveTo(1)));
        session.engine().take_commands();
        session.drain_events();

        assert_eq!(session.next(), Ok(Navigation::NoMovement));
        assert_eq!(session.active_track_index(), Some(1));
        assert!(session.engine().commands().is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn navigation_without_selection_does_nothing() {
        let mut session = session_with(&["a.mp3", "b.mp3"]);
        assert_eq!(session.next(), Ok(Navigation::NoMovement));
        assert_eq!(session.previous(), Ok(Navigation::NoMovement));
        assert_eq!(session.transport(), TransportState::Idle);
    }

    #[test]
    fn toggle_play_pause_cycle() {
        let mut session = session_with(&["a.mp3"]);
        session.toggle_play_pause().unwrap();
        assert_eq!(session.transport(), TransportState::Idle);

        session.select_track(0, true).unwrap();
        session.toggle_play_pause().unwrap();
        assert_eq!(session.transport(), TransportState::Paused);
        session.toggle_play_pause().unwrap();
        assert_eq!(session.transport(), TransportState::Playing);
    }

    #[test]
    fn toggle_after_end_restarts_from_zero() {
        let mut session = session_with(&["a.mp3"]);
        session.select_track(0, true).unwrap();
        session.on_track_ended().unwrap();
        session.engine().take_commands();

        session.toggle_play_pause().unwrap();
        assert_eq!(session.transport(), TransportState::Playing);
        assert_eq!(
            session.engine().commands(),
            vec![EngineCommand::Seek(0.0), EngineCommand::Play]
        );
    }

    #[test]
    fn track_end_resets_clock_from_paused() {
        let mut session = session_with(&["a.mp3"]);
        session.engine().set_track_duration("http://host/songs/BGM/a.mp3", 100.0);
        session.select_track(0, false).unwrap();
        session.engine().set_position(99.0);
        session.on_time_advanced();
        assert_eq!(session.clock().elapsed_label(), "01:39");

        session.on_track_ended().unwrap();
        assert_eq!(session.transport(), TransportState::Ended);
        assert_eq!(session.snapshot().elapsed, "00:00");
        assert_eq!(session.active_track_index(), Some(0));
    }

    #[test]
    fn clock_stays_at_zero_after_end() {
        let mut session = session_with(&["a.mp3"]);
        session.engine().set_track_duration("http://host/songs/BGM/a.mp3", 100.0);
        session.select_track(0, true).unwrap();
        assert!(session.engine().tick(100.0));
        session.on_track_ended().unwrap();
        session.drain_events();

        assert!(!session.on_time_advanced());
        assert_eq!(session.snapshot().elapsed, "00:00");
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn seek_after_end_is_kept_on_play() {
        let mut session = session_with(&["a.mp3"]);
        session.engine().set_track_duration("http://host/songs/BGM/a.mp3", 100.0);
        session.select_track(0, true).unwrap();
        assert!(session.engine().tick(100.0));
        session.on_track_ended().unwrap();

        assert_eq!(session.seek(0.5), Ok(true));
        session.engine().take_commands();

        session.toggle_play_pause().unwrap();
        assert_eq!(session.transport(), TransportState::Playing);
        assert_eq!(session.engine().commands(), vec![EngineCommand::Play]);
        assert_eq!(session.engine().current_time(), 50.0);
        assert_eq!(session.clock().elapsed_label(), "00:50");
    }

    #[test]
    fn track_end_in_idle_is_ignored() {
        let mut session = session_with(&["a.mp3"]);
        session.on_track_ended().unwrap();
        assert_eq!(session.transport(), TransportState::Idle);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn auto_advance_is_opt_in() {
        let config = PlaybackConfig {
            auto_advance: true,
            ..PlaybackConfig::default()
        };
        let mut session = PlaybackSession::new(HeadlessEngine::new(), config);
        session.install_album("BGM", tracks(&["a.mp3", "b.mp3"]));
        session.select_track(0, true).unwrap();

        session.on_track_ended().unwrap();
        assert_eq!(session.active_track_index(), Some(1));
        assert_eq!(session.transport(), TransportState::Playing);

        session.on_track_ended().unwrap();
        assert_eq!(session.active_track_index(), Some(1));
        assert_eq!(session.transport(), TransportState::Ended);
    }

    #[test]
    fn seek_maps_fraction_to_duration() {
        let mut session = session_with(&["a.mp3"]);
        session.engine().set_track_duration("http://host/songs/BGM/a.mp3", 200.0);
        session.select_track(0, true).unwrap();
        session.engine().take_commands();

        assert_eq!(session.seek(0.25), Ok(true));
        assert_eq!(session.engine().commands(), vec![EngineCommand::Seek(50.0)]);
        assert_eq!(session.clock().elapsed_label(), "00:50");

        assert_eq!(session.seek(4.0), Ok(true));
        assert_eq!(session.engine().current_time(), 200.0);
    }

    #[test]
    fn seek_without_duration_is_no_op() {
        let mut session = session_with(&["a.mp3"]);
        session.select_track(0, true).unwrap();
        session.engine().take_commands();

        assert_eq!(session.seek(0.5), Ok(false));
        assert!(session.engine().commands().is_empty());
    }

    #[test]
    fn volume_and_mute() {
        let mut session = session_with(&["a.mp3"]);
        session.set_volume(0.6).unwrap();
        session.toggle_mute().unwrap();
        assert!(session.is_muted());
        assert_eq!(session.volume(), 0.0);
        assert_eq!(session.engine().volume(), 0.0);

        session.toggle_mute().unwrap();
        assert!(!session.is_muted());
        assert_eq!(session.volume(), 0.6);
        assert_eq!(session.engine().volume(), 0.6);
    }

    #[test]
    fn volume_percent_slider() {
        let mut session = session_with(&["a.mp3"]);
        session.set_volume_percent(40).unwrap();
        assert_eq!(session.volume(), 0.4);
    }

    #[test]
    fn rejected_play_leaves_track_paused() {
        let mut session = session_with(&["a.mp3"]);
        session.select_track(0, false).unwrap();
        session.engine().fail_commands(true);

        assert!(matches!(
            session.toggle_play_pause(),
            Err(PlaybackError::Engine(_))
        ));
        assert_eq!(session.transport(), TransportState::Paused);
        assert!(session
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { .. })));
    }

    #[test]
    fn install_album_returns_to_idle() {
        let mut session = session_with(&["a.mp3"]);
        session.select_track(0, true).unwrap();
        session.engine().take_commands();

        session.install_album("Lofi", tracks(&["x.mp3", "y.mp3"]));
        assert_eq!(session.transport(), TransportState::Idle);
        assert_eq!(session.active_track_index(), None);
        assert_eq!(session.active_album_id(), Some("Lofi"));
        assert_eq!(session.track_count(), 2);
        assert_eq!(session.engine().commands(), vec![EngineCommand::Pause]);
    }

    #[test]
    fn events_follow_a_selection() {
        let mut session = session_with(&["a.mp3", "b.mp3"]);
        session.select_track(0, true).unwrap();
        session.drain_events();
        session.next().unwrap();

        let events = session.drain_events();
        assert_eq!(
            events[0],
            PlaybackEvent::TrackChanged {
                index: 1,
                track_id: "b.mp3".to_string(),
                previous_track_id: Some("a.mp3".to_string()),
            }
        );
        assert!(!events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::TransportChanged { .. })));
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut session = session_with(&["Intro%20Theme.mp3", "b.mp3"]);
        session.engine().set_track_duration("http://host/songs/BGM/Intro%20Theme.mp3", 125.0);
        session.select_track(0, true).unwrap();
        session.engine().tick(65.0);
        session.on_time_advanced();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.album_id.as_deref(), Some("BGM"));
        assert_eq!(snapshot.track_name.as_deref(), Some("Intro Theme"));
        assert_eq!(snapshot.time_label, "01:05 / 02:05");
        assert_eq!(snapshot.seek_fraction, 65.0 / 125.0);
        assert!(snapshot.has_next);
        assert!(!snapshot.has_previous);
    }
}
