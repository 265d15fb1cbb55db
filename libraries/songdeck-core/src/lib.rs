//! Songdeck Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling for Songdeck.
//!
//! This crate provides the building blocks shared by the catalog and the
//! playback session (native and browser builds alike).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Album`, `AlbumMetadata`
//! - **Core Traits**: `CatalogRetrieval` (directory listing or manifest backend)
//! - **Error Handling**: `CatalogError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use songdeck_core::{Album, AlbumMetadata, Track};
//!
//! let track = Track::from_file_name(
//!     "Morning%20Raga.mp3",
//!     "https://example.com/songs/BGM/Morning%20Raga.mp3",
//! );
//! assert_eq!(track.display_name, "Morning Raga");
//!
//! let album = Album::new("BGM", AlbumMetadata::fallback("BGM", "/songs/BGM/cover.jpg"));
//! assert_eq!(album.title, "BGM");
//! assert!(album.tracks.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CatalogError, Result};
pub use traits::CatalogRetrieval;
pub use types::{
    entry_name, is_listing_control, is_playable, Album, AlbumId, AlbumInfo, AlbumMetadata, Track,
    TrackId, NO_DESCRIPTION,
};
