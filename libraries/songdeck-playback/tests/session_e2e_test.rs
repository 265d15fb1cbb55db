//! End-to-end session tests: catalog store -> session -> headless engine.

use async_trait::async_trait;
use songdeck_catalog::CatalogStore;
use songdeck_core::{AlbumInfo, CatalogError, CatalogRetrieval, Result};
use songdeck_playback::{
    AlbumOpened, EngineCommand, HeadlessEngine, Navigation, PlaybackConfig, PlaybackEvent,
    PlaybackSession, TransportState,
};
use std::collections::HashMap;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// In-memory catalog keyed by album id
#[derive(Default)]
struct MemoryCatalog {
    tracks: HashMap<String, Vec<String>>,
}

impl MemoryCatalog {
    fn with_album(mut self, album: &str, entries: &[&str]) -> Self {
        self.tracks.insert(
            album.to_string(),
            entries.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

#[async_trait(?Send)]
impl CatalogRetrieval for MemoryCatalog {
    async fn list_albums(&self) -> Result<Vec<String>> {
        Ok(self.tracks.keys().map(|k| format!("{}/", k)).collect())
    }

    async fn album_info(&self, album_id: &str) -> Result<AlbumInfo> {
        Err(CatalogError::not_found("Album info", album_id))
    }

    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>> {
        self.tracks
            .get(album_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Album", album_id))
    }

    fn track_locator(&self, album_id: &str, file_name: &str) -> String {
        format!("/songs/{}/{}", album_id, file_name)
    }

    fn cover_locator(&self, album_id: &str, cover: Option<&str>) -> String {
        format!("/songs/{}/{}", album_id, cover.unwrap_or("cover.jpg"))
    }
}

fn bgm_catalog() -> CatalogStore<MemoryCatalog> {
    let catalog = MemoryCatalog::default()
        .with_album(
            "BGM",
            &["../", "opening.mp3", "notes.txt", "field.mp3", "ending.mp3"],
        )
        .with_album("Empty", &["readme.txt"]);
    CatalogStore::new(catalog, vec!["mp3".to_string()])
}

fn session() -> PlaybackSession<HeadlessEngine> {
    PlaybackSession::new(HeadlessEngine::new(), PlaybackConfig::default())
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn bgm_walk_stops_at_last_track() {
    let catalog = bgm_catalog();
    let mut session = session();

    let count = session.load_album(&catalog, "BGM").await;
    assert_eq!(count, 3);
    assert_eq!(session.transport(), TransportState::Idle);
    assert_eq!(session.active_track_index(), None);

    session.select_track(0, true).unwrap();
    session.next().unwrap();
    session.next().unwrap();
    assert_eq!(session.active_track_index(), Some(2));

    assert_eq!(session.next(), Ok(Navigation::NoMovement));
    assert_eq!(session.active_track_index(), Some(2));
    assert_eq!(session.transport(), TransportState::Playing);
}

#[tokio::test]
async fn load_album_never_autoplays() {
    let catalog = bgm_catalog();
    let mut session = session();
    session.engine().take_commands();

    session.load_album(&catalog, "BGM").await;
    assert!(session.engine().commands().is_empty());
    assert!(!session.engine().is_playing());
}

#[tokio::test]
async fn missing_album_loads_as_empty() {
    let catalog = bgm_catalog();
    let mut session = session();

    assert_eq!(session.load_album(&catalog, "Nope").await, 0);
    assert_eq!(session.active_album_id(), Some("Nope"));
    assert!(session.select_track(0, true).is_err());
}

#[tokio::test]
async fn open_album_starts_first_track() {
    let catalog = bgm_catalog();
    let mut session = session();

    let opened = session.open_album(&catalog, "BGM").await.unwrap();
    assert_eq!(opened, AlbumOpened::Started { track_count: 3 });
    assert_eq!(session.active_track_index(), Some(0));
    assert_eq!(session.transport(), TransportState::Playing);
    assert_eq!(session.engine().source().as_deref(), Some("/songs/BGM/opening.mp3"));
}

#[tokio::test]
async fn open_album_without_tracks_reports_empty() {
    let catalog = bgm_catalog();
    let mut session = session();

    let opened = session.open_album(&catalog, "Empty").await.unwrap();
    assert_eq!(opened, AlbumOpened::Empty);
    assert_eq!(session.transport(), TransportState::Idle);
}

#[tokio::test]
async fn default_album_is_cued_paused() {
    let catalog = bgm_catalog();
    let mut session = session();

    let opened = session.cue_default_album(&catalog).await.unwrap();
    assert_eq!(opened, AlbumOpened::Cued { track_count: 3 });
    assert_eq!(session.active_album_id(), Some("BGM"));
    assert_eq!(session.transport(), TransportState::Paused);
    assert!(!session.engine().is_playing());
}

#[tokio::test]
async fn switching_album_clears_selection() {
    let catalog = bgm_catalog();
    let mut session = session();
    session.open_album(&catalog, "BGM").await.unwrap();
    session.next().unwrap();

    session.load_album(&catalog, "Empty").await;
    assert_eq!(session.active_track_index(), None);
    assert_eq!(session.transport(), TransportState::Idle);
    assert!(!session.engine().is_playing());
}

#[tokio::test]
async fn playing_through_a_track_with_the_clock() {
    let catalog = bgm_catalog();
    let mut session = session();
    session
        .engine()
        .set_track_duration("/songs/BGM/opening.mp3", 95.0);
    session.open_album(&catalog, "BGM").await.unwrap();
    session.drain_events();

    for _ in 0..65 {
        session.engine().tick(1.0);
        session.on_time_advanced();
    }
    assert_eq!(session.snapshot().time_label, "01:05 / 01:35");

    while !session.engine().tick(1.0) {
        session.on_time_advanced();
    }
    session.on_track_ended().unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.transport, TransportState::Ended);
    assert_eq!(snapshot.elapsed, "00:00");
    assert_eq!(snapshot.track_index, Some(0));

    let events = session.drain_events();
    assert!(events.contains(&PlaybackEvent::TrackEnded {
        track_id: "opening.mp3".to_string()
    }));
    assert!(events.contains(&PlaybackEvent::TransportChanged {
        state: TransportState::Ended
    }));
}

#[tokio::test]
async fn replay_after_end() {
    let catalog = bgm_catalog();
    let mut session = session();
    session.open_album(&catalog, "BGM").await.unwrap();
    session.on_track_ended().unwrap();
    session.engine().take_commands();

    session.toggle_play_pause().unwrap();
    assert_eq!(session.transport(), TransportState::Playing);
    assert_eq!(
        session.engine().commands(),
        vec![EngineCommand::Seek(0.0), EngineCommand::Play]
    );
}

#[tokio::test]
async fn select_after_end_honours_autoplay() {
    let catalog = bgm_catalog();
    let mut session = session();
    session.open_album(&catalog, "BGM").await.unwrap();
    session.on_track_ended().unwrap();

    session.select_track(1, false).unwrap();
    assert_eq!(session.transport(), TransportState::Paused);
    session.select_track(2, true).unwrap();
    assert_eq!(session.transport(), TransportState::Playing);
}

#[tokio::test]
async fn auto_advance_plays_through_album() {
    let catalog = bgm_catalog();
    let config = PlaybackConfig {
        auto_advance: true,
        ..PlaybackConfig::default()
    };
    let mut session = PlaybackSession::new(HeadlessEngine::new(), config);
    session.open_album(&catalog, "BGM").await.unwrap();

    session.on_track_ended().unwrap();
    session.on_track_ended().unwrap();
    assert_eq!(session.active_track_index(), Some(2));
    assert_eq!(session.transport(), TransportState::Playing);

    session.on_track_ended().unwrap();
    assert_eq!(session.transport(), TransportState::Ended);
}

#[tokio::test]
async fn album_load_event_comes_first() {
    let catalog = bgm_catalog();
    let mut session = session();
    session.open_album(&catalog, "BGM").await.unwrap();

    let events = session.drain_events();
    assert_eq!(
        events[0],
        PlaybackEvent::AlbumLoaded {
            album_id: "BGM".to_string(),
            track_count: 3,
        }
    );
    assert!(matches!(
        events[1],
        PlaybackEvent::TrackChanged {
            index: 0,
            previous_track_id: None,
            ..
        }
    ));
}
