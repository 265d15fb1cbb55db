//! Strategy selection from settings.

use crate::listing::DirectoryListingCatalog;
use crate::manifest::ManifestCatalog;
use crate::settings::{CatalogSettings, CatalogStrategy};
use async_trait::async_trait;
use songdeck_core::{AlbumInfo, CatalogRetrieval, Result};

/// Either HTTP backend, chosen at runtime by `CatalogSettings::strategy`
#[derive(Debug, Clone)]
pub enum HttpCatalog {
    Listing(DirectoryListingCatalog),
    Manifest(ManifestCatalog),
}

impl HttpCatalog {
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self> {
        match settings.strategy {
            CatalogStrategy::Listing => Ok(Self::Listing(DirectoryListingCatalog::new(settings)?)),
            CatalogStrategy::Manifest => Ok(Self::Manifest(ManifestCatalog::new(settings)?)),
        }
    }

    fn inner(&self) -> &dyn CatalogRetrieval {
        match self {
            Self::Listing(catalog) => catalog,
            Self::Manifest(catalog) => catalog,
        }
    }
}

#[async_trait(?Send)]
impl CatalogRetrieval for HttpCatalog {
    async fn list_albums(&self) -> Result<Vec<String>> {
        self.inner().list_albums().await
    }

    async fn album_info(&self, album_id: &str) -> Result<AlbumInfo> {
        self.inner().album_info(album_id).await
    }

    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>> {
        self.inner().list_tracks(album_id).await
    }

    fn track_locator(&self, album_id: &str, file_name: &str) -> String {
        self.inner().track_locator(album_id, file_name)
    }

    fn cover_locator(&self, album_id: &str, cover: Option<&str>) -> String {
        self.inner().cover_locator(album_id, cover)
    }
}
