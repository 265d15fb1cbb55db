//! Shared HTTP plumbing for the retrieval backends.

use crate::settings::CatalogSettings;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use songdeck_core::{CatalogError, Result};
use tracing::debug;
use url::Url;

/// HTTP client bound to the catalog's base URL.
///
/// Both retrieval strategies sit on top of this: it validates the base URL
/// once, builds properly percent-encoded request URLs, and maps transport,
/// status, and parse failures onto `CatalogError`.
#[derive(Debug, Clone)]
pub struct CatalogHttp {
    http: Client,
    base: Url,
}

impl CatalogHttp {
    /// Create a client for the configured base URL.
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        // Validate URL
        if settings.base_url.trim().is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base = Url::parse(settings.base_url.trim())
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = build_client(settings)?;

        Ok(Self { http, base })
    }

    /// The validated base URL
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of a folder below the base (always ends with `/`)
    pub fn folder_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.file_url(segments);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("");
        }
        url
    }

    /// URL of a file below the base
    ///
    /// Each segment may itself contain `/`; empty pieces are skipped and the
    /// rest are percent-encoded.
    pub fn file_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.extend(segment.split('/').filter(|s| !s.is_empty()));
            }
        }
        url
    }

    /// GET a URL and return the body as text
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| CatalogError::parse(format!("Failed to read body of {}: {}", url, e)))
    }

    /// GET a URL and decode the body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        self.get(url)
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::parse(format!("Failed to parse {}: {}", url, e)))
    }

    async fn get(&self, url: &Url) -> Result<Response> {
        debug!(url = %url, "Fetching catalog document");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(settings: &CatalogSettings) -> Result<Client> {
    use std::time::Duration;

    // Create HTTP client with reasonable defaults
    Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("Songdeck/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CatalogError::request(e.to_string()))
}

// The browser's fetch owns timeouts and the user agent.
#[cfg(target_arch = "wasm32")]
fn build_client(_settings: &CatalogSettings) -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| CatalogError::request(e.to_string()))
}
