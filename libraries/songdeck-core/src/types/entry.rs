//! Helpers for classifying raw catalog entries
//!
//! Directory listings mix real entries with navigation chrome (parent links,
//! sort links, dot-files). A manifest only holds real entries, but runs
//! through the same filter so both backends behave identically.

/// Bare name of a listing entry: the last non-empty path segment of an href,
/// without query or fragment.
///
/// `"/songs/BGM/"` → `Some("BGM")`, `"Track%201.mp3"` → `Some("Track%201.mp3")`,
/// `"?C=M;O=A"` → `None`.
pub fn entry_name(href: &str) -> Option<&str> {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    href[..end].split('/').rfind(|s| !s.is_empty())
}

/// True for entries that belong to the listing page itself rather than the catalog
pub fn is_listing_control(href: &str) -> bool {
    let trimmed = href.trim();
    if trimmed.is_empty() || trimmed.starts_with('?') || trimmed.starts_with('#') {
        return true;
    }
    if trimmed.contains("://") || trimmed.starts_with("mailto:") {
        return true;
    }

    match entry_name(trimmed) {
        None => true,
        Some(name) => name.starts_with('.'),
    }
}

/// True when the entry's extension is one of `extensions` (case-insensitive)
pub fn is_playable<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && extensions
            .iter()
            .any(|allowed| allowed.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}
