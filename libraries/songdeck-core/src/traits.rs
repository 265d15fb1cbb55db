/// Core traits for Songdeck
use crate::error::Result;
use crate::types::AlbumInfo;
use async_trait::async_trait;

/// Catalog retrieval service
///
/// Implementers fetch the raw catalog: a static folder listing, a manifest
/// document, or anything else. Results are *raw*: entries may include listing
/// chrome or non-media files. Filtering, ordering guarantees and fallback
/// defaults belong to `CatalogStore`, which is the only consumer.
///
/// Futures are not required to be `Send` so the same implementation runs in
/// the browser (`wasm32`) and on a current-thread runtime.
#[async_trait(?Send)]
pub trait CatalogRetrieval {
    /// List album entries (folder hrefs or manifest ids)
    ///
    /// # Errors
    /// Returns an error if the listing cannot be fetched or parsed
    async fn list_albums(&self) -> Result<Vec<String>>;

    /// Fetch descriptive info for one album
    ///
    /// # Errors
    /// Returns an error if the info document is missing or malformed
    async fn album_info(&self, album_id: &str) -> Result<AlbumInfo>;

    /// List the entries (file hrefs or names) of one album, in retrieval order
    ///
    /// # Errors
    /// Returns an error if the listing cannot be fetched or parsed
    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>>;

    /// Resolve the locator the media engine loads for a track file
    fn track_locator(&self, album_id: &str, file_name: &str) -> String;

    /// Resolve the cover image locator for an album
    ///
    /// `cover` is the album's own cover reference, if its info named one.
    fn cover_locator(&self, album_id: &str, cover: Option<&str>) -> String;
}
