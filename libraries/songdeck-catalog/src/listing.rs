//! Directory-listing retrieval backend.
//!
//! Reads the HTML index pages a static file server generates for
//! `{root}/` and `{root}/{album}/`, plus an optional `info.json` per album.

use crate::client::CatalogHttp;
use crate::settings::CatalogSettings;
use async_trait::async_trait;
use songdeck_core::{AlbumInfo, CatalogRetrieval, Result};
use tracing::debug;

/// Album metadata document inside each album folder
const INFO_FILE: &str = "info.json";

/// Catalog backed by a static folder hierarchy.
#[derive(Debug, Clone)]
pub struct DirectoryListingCatalog {
    http: CatalogHttp,
    root: String,
    cover_file: String,
}

impl DirectoryListingCatalog {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        Ok(Self {
            http: CatalogHttp::new(settings)?,
            root: settings.root.clone(),
            cover_file: settings.cover_file.clone(),
        })
    }
}

#[async_trait(?Send)]
impl CatalogRetrieval for DirectoryListingCatalog {
    async fn list_albums(&self) -> Result<Vec<String>> {
        let url = self.http.folder_url([self.root.as_str()]);
        let html = self.http.get_text(&url).await?;

        // Folders are the entries rendered with a trailing slash
        let folders: Vec<String> = extract_hrefs(&html)
            .into_iter()
            .filter(|href| strip_query(href).ends_with('/'))
            .collect();

        debug!(url = %url, albums = folders.len(), "Fetched album listing");
        Ok(folders)
    }

    async fn album_info(&self, album_id: &str) -> Result<AlbumInfo> {
        let url = self
            .http
            .file_url([self.root.as_str(), album_id, INFO_FILE]);
        self.http.get_json(&url).await
    }

    async fn list_tracks(&self, album_id: &str) -> Result<Vec<String>> {
        let url = self.http.folder_url([self.root.as_str(), album_id]);
        let html = self.http.get_text(&url).await?;
        let entries = extract_hrefs(&html);

        debug!(url = %url, entries = entries.len(), "Fetched track listing");
        Ok(entries)
    }

    fn track_locator(&self, album_id: &str, file_name: &str) -> String {
        let decoded = decode(file_name);
        self.http
            .file_url([self.root.as_str(), album_id, decoded.as_str()])
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

fn decode(name: &str) -> String {
    urlencoding::decode(name)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| name.to_string())
}

fn strip_query(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    &href[..end]
}

/// Pull every `href` attribute value out of the anchor tags of an HTML page.
///
/// Tolerates quoted, single-quoted and bare attribute values and decodes
/// the handful of character entities servers emit in hrefs.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let mut hrefs = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find("<a") {
        let tag_start = cursor + found;
        let Some(tag_len) = lower[tag_start..].find('>') else {
            break;
        };
        let tag_end = tag_start + tag_len;
        cursor = tag_end + 1;

        // `<abbr>`, `<area>`, ... are not anchors
        let after_name = lower[tag_start + 2..].chars().next();
        if !matches!(after_name, Some(c) if c.is_ascii_whitespace()) {
            continue;
        }

        if let Some(value) = href_value(&html[tag_start..tag_end], &lower[tag_start..tag_end]) {
            hrefs.push(decode_entities(value));
        }
    }

    hrefs
}

fn href_value<'a>(tag: &'a str, lower_tag: &str) -> Option<&'a str> {
    let mut search = 0;
    loop {
        let pos = search + lower_tag[search..].find("href")?;
        search = pos + 4;

        // Must be a whole attribute name
        let preceded_ok = lower_tag[..pos]
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_whitespace());
        if !preceded_ok {
            continue;
        }

        let rest = tag[search..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();

        return match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &rest[1..];
                body.find(quote).map(|end| &body[..end])
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
            None => None,
        };
    }
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
