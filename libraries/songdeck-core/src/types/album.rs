//! Album types

use super::Track;
use serde::{Deserialize, Serialize};

/// Albums are identified by their folder name
pub type AlbumId = String;

/// Description shown when an album's metadata cannot be retrieved
pub const NO_DESCRIPTION: &str = "No description available.";

/// An album (one folder of the catalog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub description: String,
    pub cover_locator: String,
    /// Ordered as retrieved; empty until the album's listing is loaded
    pub tracks: Vec<Track>,
}

impl Album {
    /// Create an album card without a track list
    pub fn new(id: impl Into<AlbumId>, metadata: AlbumMetadata) -> Self {
        Self {
            id: id.into(),
            title: metadata.title,
            description: metadata.description,
            cover_locator: metadata.cover_locator,
            tracks: Vec::new(),
        }
    }

    /// Descriptive metadata of this album
    pub fn metadata(&self) -> AlbumMetadata {
        AlbumMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            cover_locator: self.cover_locator.clone(),
        }
    }
}

/// Resolved descriptive metadata for an album card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumMetadata {
    pub title: String,
    pub description: String,
    pub cover_locator: String,
}

impl AlbumMetadata {
    /// Placeholder metadata used when retrieval fails
    pub fn fallback(album_id: &str, cover_locator: impl Into<String>) -> Self {
        Self {
            title: album_id.to_string(),
            description: NO_DESCRIPTION.to_string(),
            cover_locator: cover_locator.into(),
        }
    }
}

/// Raw album info as served by a retrieval backend (`info.json` or manifest entry)
///
/// Every field is optional; missing ones are filled from the fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Cover file name or URL relative to the album folder
    #[serde(default)]
    pub cover: Option<String>,
}
