//! Manifest retrieval backend.
//!
//! One JSON document describes every album:
//!
//! ```json
//! {
//!   "albums": [
//!     { "id": "BGM", "title": "Background", "description": "...",
//!       "cover": "cover.jpg", "tracks": ["one.mp3", "two.mp3"] }
//!   ]
//! }
//! ```
//!
//! Track files and covers still live under `{root}/{album}/`.

use crate::client::CatalogHttp;
use crate::settings::CatalogSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use songdeck_core::{AlbumInfo, CatalogError, CatalogRetrieval, Result};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// The manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub albums: Vec<ManifestAlbum>,
}

/// One album entry of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestAlbum {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
}

impl Manifest {
    fn album(&self, album_id: &str) -> Result<&ManifestAlbum> {
        self.albums
            .iter()
            .find(|a| a.id == album_id)
            .ok_or_else(|| CatalogError::not_found("Album", album_id))
    }
}

/// Catalog backed by a JSON manifest.
///
/// `list_albums` always fetches the manifest (a catalog reload); the
/// per-album calls reuse the last successfully fetched copy.
#[derive(Debug, Clone)]
pub struct ManifestCatalog {
    http: CatalogHttp,
    root: String,
    manifest_path: String,
    cover_file: String,
    cached: Arc<Mutex<Option<Arc<Manifest>>>>,
}

impl ManifestCatalog {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        Ok(Self {
            http: CatalogHttp::new(settings)?,
            root: settings.root.clone(),
            manifest_path: settings.manifest_path.clone(),
            cover_file: settings.cover_file.clone(),
            cached: Arc::new(Mutex::new(None)),
        })
    }

    async fn fetch(&self) -> Result<Arc<Manifest>> {
        let url = self.http.file_url([self.manifest_path.as_str()]);
        let manifest: Manifest = self.http.get_json(&url).await?;
        debug!(url = %url, albums = manifest.albums.len(), "Fetched manifest");

        let manifest = Arc::new(manifest);
        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some(Arc::clone(&manifest));
        }
        Ok(manifest)
    }

    async fn manifest(&self) -> Result<Arc<Manifest>> {
        let cached = self.cached.lock().ok().and_then(|c| c.clone());
        match cached {
            Some(manifest) => Ok(manifest),
            None => self.fetch().await,
        }
    }
}

#[async_trait(?Send)]
impl CatalogRetrieval for ManifestCatalog {
    async fn list_albums(&self) -> Result<Vec<String>> {
        let manifest = self.fetch().await?;
        Ok(manifest.albums.iter().map(|a| a.id.clone()).collect())
    }

    async fn album_info(&self, album_id: &str) -> Result<AlbumInfo> {
        let manifest = self.manifest().await?;
        let album = manifest.album(album_id)?;
        Ok(AlbumInfo {
            title: album.title.clone(),
            description: album.description.clone(),
            cover: album.cover.clone(),
        })
    }

    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>> {
        let manifest = self.manifest().await?;
        Ok(manifest.album(album_id)?.tracks.clone())
    }

    fn track_locator(&self, album_id: &str, file_name: &str) -> String {
        self.http
            .file_url([self.root.as_str(), album_id, file_name])
            .to_string()
    }

    fn cover_locator(&self, album_id: &str, cover: Option<&str>) -> String {
        match cover {
            Some(cover) if cover.contains("://") => cover.to_string(),
            Some(cover) => self
                .http
                .file_url([self.root.as_str(), album_id, cover])
                .to_string(),
            None => self
                .http
                .file_url([self.root.as_str(), album_id, self.cover_file.as_str()])
                .to_string(),
        }
    }
}
