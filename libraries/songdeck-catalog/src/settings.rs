//! Catalog settings

use serde::{Deserialize, Serialize};

/// How the catalog is retrieved from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStrategy {
    /// Scrape the static file server's directory listing pages
    #[default]
    Listing,

    /// Read a single JSON manifest document
    Manifest,
}

/// Where and how to find the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Base URL of the site serving the catalog (e.g. "https://music.example.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Folder holding one sub-folder per album, relative to `base_url`
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default)]
    pub strategy: CatalogStrategy,

    /// Manifest document, relative to `base_url` (manifest strategy only)
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// File extensions treated as playable tracks
    #[serde(default = "default_playable_extensions")]
    pub playable_extensions: Vec<String>,

    /// Cover image file name inside each album folder
    #[serde(default = "default_cover_file")]
    pub cover_file: String,

    /// Per-request timeout (ignored in the browser)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl CatalogSettings {
    /// Settings for a site root, everything else defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Switch to the manifest strategy with the given manifest path
    pub fn with_manifest(mut self, manifest_path: impl Into<String>) -> Self {
        self.strategy = CatalogStrategy::Manifest;
        self.manifest_path = manifest_path.into();
        self
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            root: default_root(),
            strategy: CatalogStrategy::default(),
            manifest_path: default_manifest_path(),
            playable_extensions: default_playable_extensions(),
            cover_file: default_cover_file(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// Default values
fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_root() -> String {
    "songs".to_string()
}

fn default_manifest_path() -> String {
    "songs/manifest.json".to_string()
}

fn default_playable_extensions() -> Vec<String> {
    vec!["mp3".to_string()]
}

fn default_cover_file() -> String {
    "cover.jpg".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_static_site_layout() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.root, "songs");
        assert_eq!(settings.strategy, CatalogStrategy::Listing);
        assert_eq!(settings.playable_extensions, vec!["mp3".to_string()]);
        assert_eq!(settings.cover_file, "cover.jpg");
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings: CatalogSettings =
            serde_json::from_str(r#"{"base_url": "https://x.dev", "strategy": "manifest"}"#)
                .unwrap();
        assert_eq!(settings.base_url, "https://x.dev");
        assert_eq!(settings.strategy, CatalogStrategy::Manifest);
        assert_eq!(settings.manifest_path, "songs/manifest.json");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn with_manifest_switches_strategy() {
        let settings = CatalogSettings::new("https://x.dev").with_manifest("catalog.json");
        assert_eq!(settings.strategy, CatalogStrategy::Manifest);
        assert_eq!(settings.manifest_path, "catalog.json");
    }
}
