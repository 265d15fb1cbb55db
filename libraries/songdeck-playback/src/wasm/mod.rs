//! WASM bindings for songdeck-playback
//!
//! Drives the playback session from a browser page: an `HTMLAudioElement`
//! is the media engine and the HTTP catalog supplies albums.

#[cfg(feature = "wasm")]
pub mod engine;

#[cfg(feature = "wasm")]
pub mod session;

#[cfg(feature = "wasm")]
pub mod types;

#[cfg(feature = "wasm")]
pub use engine::HtmlAudioEngine;

#[cfg(feature = "wasm")]
pub use session::WasmPlaybackSession;

#[cfg(feature = "wasm")]
pub use types::{AlbumCard, TrackRow, WasmSessionConfig};
