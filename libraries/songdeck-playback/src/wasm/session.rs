//! WASM-compatible PlaybackSession wrapper

use super::engine::HtmlAudioEngine;
use super::types::{AlbumCard, TrackRow, WasmSessionConfig};
use crate::PlaybackSession;
use js_sys::{Function, Promise};
use songdeck_catalog::{CatalogStore, HttpCatalog};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Event;

type Session = PlaybackSession<HtmlAudioEngine>;

/// Browser playback session
///
/// Owns the `<audio>` element, the catalog, and one change callback that
/// receives `(snapshot, events)` after every mutation.
#[wasm_bindgen]
pub struct WasmPlaybackSession {
    inner: Rc<RefCell<Session>>,
    catalog: Rc<CatalogStore<HttpCatalog>>,
    on_change: Rc<RefCell<Option<Function>>>,

    // Dropping these would detach the element listeners
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl WasmPlaybackSession {
    /// Create a session; `options` is `{ catalog?, playback? }` or undefined
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmPlaybackSession, JsValue> {
        console_error_panic_hook::set_once();

        let config: WasmSessionConfig = if options.is_undefined() || options.is_null() {
            WasmSessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };

        let catalog = CatalogStore::from_settings(&config.catalog).map_err(to_js)?;
        let engine = HtmlAudioEngine::new().map_err(to_js)?;
        let element = engine.element().clone();

        let inner = Rc::new(RefCell::new(PlaybackSession::new(engine, config.playback)));
        let on_change = Rc::new(RefCell::new(None));

        let on_time = {
            let inner = Rc::clone(&inner);
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move |_: Event| {
                let changed = match inner.try_borrow_mut() {
                    Ok(mut session) => session.on_time_advanced(),
                    Err(_) => false,
                };
                if changed {
                    notify(&inner, &on_change);
                }
            }) as Box<dyn FnMut(Event)>)
        };

        let on_ended = {
            let inner = Rc::clone(&inner);
            let on_change = Rc::clone(&on_change);
            Closure::wrap(Box::new(move |_: Event| {
                if let Ok(mut session) = inner.try_borrow_mut() {
                    // Failures are already queued as Error events
                    let _ = session.on_track_ended();
                }
                notify(&inner, &on_change);
            }) as Box<dyn FnMut(Event)>)
        };

        element.add_event_listener_with_callback("timeupdate", on_time.as_ref().unchecked_ref())?;
        element.add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref())?;

        Ok(Self {
            inner,
            catalog: Rc::new(catalog),
            on_change,
            _listeners: vec![on_time, on_ended],
        })
    }

    // ===== Catalog =====

    /// Fetch the album cards; resolves to an array (empty on failure)
    #[wasm_bindgen(js_name = loadAlbums)]
    pub fn load_albums(&self) -> Promise {
        let catalog = Rc::clone(&self.catalog);
        future_to_promise(async move {
            let cards: Vec<AlbumCard> = catalog
                .load_album_list()
                .await
                .iter()
                .map(AlbumCard::from)
                .collect();
            serde_wasm_bindgen::to_value(&cards).map_err(to_js)
        })
    }

    /// Make an album active without playing; resolves to the track count
    #[wasm_bindgen(js_name = loadAlbum)]
    pub fn load_album(&self, album_id: String) -> Promise {
        let inner = Rc::clone(&self.inner);
        let catalog = Rc::clone(&self.catalog);
        let on_change = Rc::clone(&self.on_change);
        future_to_promise(async move {
            let tracks = catalog.load_tracks(&album_id).await;
            let count = inner.borrow_mut().install_album(album_id, tracks);
            notify(&inner, &on_change);
            Ok(JsValue::from_f64(count as f64))
        })
    }

    /// Album card click: load and start the first track
    ///
    /// Resolves to `"Empty"` when the album has no playable tracks.
    #[wasm_bindgen(js_name = openAlbum)]
    pub fn open_album(&self, album_id: String) -> Promise {
        self.load_and_start(Some(album_id), true)
    }

    /// Startup: cue the default album's first track, paused
    #[wasm_bindgen(js_name = cueDefaultAlbum)]
    pub fn cue_default_album(&self) -> Promise {
        self.load_and_start(None, false)
    }

    // ===== Playback Control =====

    /// Select a row of the track list
    #[wasm_bindgen(js_name = selectTrack)]
    pub fn select_track(&self, index: usize, autoplay: Option<bool>) -> Result<(), JsValue> {
        self.apply(|s| s.select_track(index, autoplay.unwrap_or(true)))
    }

    /// Skip to next track (no-op at the last one)
    pub fn next(&self) -> Result<(), JsValue> {
        self.apply(|s| s.next().map(|_| ()))
    }

    /// Go to previous track (no-op at the first one)
    pub fn previous(&self) -> Result<(), JsValue> {
        self.apply(|s| s.previous().map(|_| ()))
    }

    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&self) -> Result<(), JsValue> {
        self.apply(|s| s.toggle_play_pause())
    }

    /// Seek bar input (0.0 - 1.0)
    pub fn seek(&self, fraction: f64) -> Result<(), JsValue> {
        self.apply(|s| s.seek(fraction).map(|_| ()))
    }

    // ===== Volume Control =====

    /// Volume slider input (0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, percent: u8) -> Result<(), JsValue> {
        self.apply(|s| s.set_volume_percent(percent))
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) -> Result<(), JsValue> {
        self.apply(|s| s.toggle_mute())
    }

    // ===== State Queries =====

    /// Current render model
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.borrow().snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Rows of the active album's track list
    pub fn tracks(&self) -> JsValue {
        let session = self.inner.borrow();
        let rows = TrackRow::rows(session.tracks(), session.active_track_index());
        serde_wasm_bindgen::to_value(&rows).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register the change callback, called with `(snapshot, events)`
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

impl WasmPlaybackSession {
    fn load_and_start(&self, album_id: Option<String>, autoplay: bool) -> Promise {
        let inner = Rc::clone(&self.inner);
        let catalog = Rc::clone(&self.catalog);
        let on_change = Rc::clone(&self.on_change);
        future_to_promise(async move {
            let album_id =
                album_id.unwrap_or_else(|| inner.borrow().config().default_album.clone());
            let tracks = catalog.load_tracks(&album_id).await;

            let opened = {
                let mut session = inner.borrow_mut();
                session.install_album(album_id, tracks);
                session.start_first_track(autoplay)
            };
            notify(&inner, &on_change);

            let opened = opened.map_err(to_js)?;
            serde_wasm_bindgen::to_value(&opened).map_err(to_js)
        })
    }

    fn apply(
        &self,
        op: impl FnOnce(&mut Session) -> crate::Result<()>,
    ) -> Result<(), JsValue> {
        let result = op(&mut self.inner.borrow_mut());
        notify(&self.inner, &self.on_change);
        result.map_err(to_js)
    }
}

/// Drain queued events and hand them to the change callback
fn notify(inner: &RefCell<Session>, on_change: &RefCell<Option<Function>>) {
    let (snapshot, events) = match inner.try_borrow_mut() {
        Ok(mut session) => (session.snapshot(), session.drain_events()),
        Err(_) => return,
    };
    if events.is_empty() {
        return;
    }

    let callback = on_change.borrow().clone();
    if let Some(cb) = callback {
        let snapshot = serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL);
        let events = serde_wasm_bindgen::to_value(&events).unwrap_or(JsValue::NULL);
        cb.call2(&JsValue::NULL, &snapshot, &events).ok();
    }
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
