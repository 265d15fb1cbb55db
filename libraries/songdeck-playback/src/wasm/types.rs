//! JS-facing views of catalog and session data

use crate::PlaybackConfig;
use serde::{Deserialize, Serialize};
use songdeck_catalog::CatalogSettings;
use songdeck_core::{Album, Track};

/// Album card as rendered in the album grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumCard {
    id: String,
    title: String,
    description: String,
    cover_locator: String,
}

impl From<&Album> for AlbumCard {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.clone(),
            title: album.title.clone(),
            description: album.description.clone(),
            cover_locator: album.cover_locator.clone(),
        }
    }
}

/// Row of the track list
///
/// Click handlers select by `index`; `displayName` is presentation only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRow {
    index: usize,
    id: String,
    display_name: String,
    active: bool,
}

impl TrackRow {
    pub fn rows(tracks: &[Track], active: Option<usize>) -> Vec<Self> {
        tracks
            .iter()
            .enumerate()
            .map(|(index, track)| Self {
                index,
                id: track.id.clone(),
                display_name: track.display_name.clone(),
                active: active == Some(index),
            })
            .collect()
    }
}

/// Constructor options passed from JS
///
/// Every field is optional; `undefined` gives the defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WasmSessionConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,
}
