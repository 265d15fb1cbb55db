/// Track domain type
use serde::{Deserialize, Serialize};

/// Tracks are identified by their raw file name as listed
pub type TrackId = String;

/// A playable item inside an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Raw file name (may still be percent-encoded)
    pub id: TrackId,

    /// Human readable name: percent-decoded, extension stripped
    pub display_name: String,

    /// URL or path the media engine loads
    pub locator: String,
}

impl Track {
    /// Build a track from its listed file name and resolved locator
    pub fn from_file_name(file_name: impl Into<TrackId>, locator: impl Into<String>) -> Self {
        let id = file_name.into();
        let display_name = display_name(&id);
        Self {
            id,
            display_name,
            locator: locator.into(),
        }
    }
}

/// Decode a file name for display. Undecodable input is shown as-is.
fn display_name(file_name: &str) -> String {
    let decoded = urlencoding::decode(file_name)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| file_name.to_string());

    match decoded.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
        _ => decoded,
    }
}
