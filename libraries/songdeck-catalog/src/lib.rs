//! Songdeck Catalog
//!
//! Album catalog for Songdeck: the `CatalogStore` fallback policy plus HTTP
//! retrieval backends.
//!
//! # Features
//!
//! - **Directory listing**: scrape a static file server's index pages
//! - **Manifest**: read one JSON document describing every album
//! - **Fallbacks**: failed retrievals degrade to empty lists and placeholder
//!   metadata, never to user-facing errors
//!
//! # Example
//!
//! ```ignore
//! use songdeck_catalog::{CatalogSettings, CatalogStore, HttpCatalog};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = CatalogSettings::new("https://music.example.com");
//!     let backend = HttpCatalog::from_settings(&settings)?;
//!     let store = CatalogStore::new(backend, settings.playable_extensions.clone());
//!
//!     for album in store.load_album_list().await {
//!         println!("{}: {}", album.title, album.description);
//!     }
//!
//!     let tracks = store.load_tracks("BGM").await;
//!     println!("BGM has {} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

mod backend;
mod client;
mod listing;
mod manifest;
mod settings;
mod store;

// Re-export main types
pub use backend::HttpCatalog;
pub use client::CatalogHttp;
pub use listing::{extract_hrefs, DirectoryListingCatalog};
pub use manifest::{Manifest, ManifestAlbum, ManifestCatalog};
pub use settings::{CatalogSettings, CatalogStrategy};
pub use store::CatalogStore;

impl CatalogStore<HttpCatalog> {
    /// Build a store over the HTTP backend chosen by `settings`
    pub fn from_settings(settings: &CatalogSettings) -> songdeck_core::Result<Self> {
        let backend = HttpCatalog::from_settings(settings)?;
        Ok(Self::new(backend, settings.playable_extensions.clone()))
    }
}
