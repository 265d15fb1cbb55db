//! Catalog store - albums and track listings with fallback policy
//!
//! Sits between the retrieval backend and the playback session:
//! - normalises raw listing entries into album ids and tracks
//! - filters listing chrome and non-playable files
//! - replaces every retrieval failure with a defined default

use songdeck_core::{
    entry_name, is_listing_control, is_playable, Album, AlbumMetadata, CatalogRetrieval, Track,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Album and track catalog over a retrieval backend
pub struct CatalogStore<R> {
    retrieval: R,
    playable_extensions: Vec<String>,
    albums: Vec<Album>,
}

impl<R: CatalogRetrieval> CatalogStore<R> {
    /// Create a store accepting the given track file extensions
    pub fn new(retrieval: R, playable_extensions: Vec<String>) -> Self {
        Self {
            retrieval,
            playable_extensions,
            albums: Vec::new(),
        }
    }

    /// The retrieval backend
    pub fn retrieval(&self) -> &R {
        &self.retrieval
    }

    /// Albums from the last `reload`
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Look up a known album by id
    pub fn album(&self, album_id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == album_id)
    }

    /// Reload the album list, replacing the known set wholesale
    pub async fn reload(&mut self) -> &[Album] {
        self.albums = self.load_album_list().await;
        &self.albums
    }

    /// Retrieve every album with its metadata (track lists left empty)
    ///
    /// Returns an empty list if the catalog cannot be retrieved at all. A
    /// metadata failure only degrades that one album to placeholder text.
    pub async fn load_album_list(&self) -> Vec<Album> {
        let entries = match self.retrieval.list_albums().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Could not load album list");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut albums = Vec::new();
        for href in entries {
            let Some(album_id) = self.album_id_from_entry(&href) else {
                continue;
            };
            if !seen.insert(album_id.clone()) {
                continue;
            }

            let metadata = self.load_album_metadata(&album_id).await;
            albums.push(Album::new(album_id, metadata));
        }

        debug!(albums = albums.len(), "Loaded album list");
        albums
    }

    /// Retrieve descriptive metadata for an album
    ///
    /// Never fails: on any retrieval error the album's folder name becomes the
    /// title and the description is `"No description available."`.
    pub async fn load_album_metadata(&self, album_id: &str) -> AlbumMetadata {
        match self.retrieval.album_info(album_id).await {
            Ok(info) => {
                let fallback =
                    AlbumMetadata::fallback(album_id, self.retrieval.cover_locator(album_id, None));
                AlbumMetadata {
                    title: non_blank(info.title).unwrap_or(fallback.title),
                    description: non_blank(info.description).unwrap_or(fallback.description),
                    cover_locator: match non_blank(info.cover) {
                        Some(cover) => self.retrieval.cover_locator(album_id, Some(&cover)),
                        None => fallback.cover_locator,
                    },
                }
            }
            Err(e) => {
                warn!(album = %album_id, error = %e, "Could not load album info, using defaults");
                AlbumMetadata::fallback(album_id, self.retrieval.cover_locator(album_id, None))
            }
        }
    }

    /// Retrieve the ordered, playable tracks of an album
    ///
    /// Listing-control entries and non-media files are dropped, duplicates
    /// keep their first position. Failure yields an empty list.
    pub async fn load_tracks(&self, album_id: &str) -> Vec<Track> {
        let entries = match self.retrieval.list_tracks(album_id).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(album = %album_id, error = %e, "Could not load tracks");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let tracks: Vec<Track> = entries
            .iter()
            .filter(|href| !is_listing_control(href))
            .filter_map(|href| entry_name(href))
            .filter(|name| is_playable(name, &self.playable_extensions))
            .filter(|name| seen.insert(name.to_string()))
            .map(|name| Track::from_file_name(name, self.retrieval.track_locator(album_id, name)))
            .collect();

        debug!(album = %album_id, tracks = tracks.len(), "Loaded tracks");
        tracks
    }

    fn album_id_from_entry(&self, href: &str) -> Option<String> {
        if is_listing_control(href) {
            return None;
        }
        let name = entry_name(href)?;
        if is_playable(name, &self.playable_extensions) {
            return None;
        }
        let decoded = urlencoding::decode(name)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| name.to_string());
        Some(decoded)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
