//! URL helpers for image sources.
//!
//! Statement images are usually absolute upload URLs, but older statements
//! carry site-relative (`/uploads/...`) or protocol-relative (`//assets...`)
//! paths that only make sense against the site they were fetched from.

use url::Url;

/// Whether `s` is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve an image source against `base`.
///
/// Absolute URLs and `data:` URIs come back unchanged (trimmed). If joining
/// fails the trimmed input is returned, so a source is never lost.
#[must_use]
pub fn create_absolute_url(src: &str, base: &Url) -> String {
    let src = src.trim();

    if src.is_empty() || src.starts_with("data:") || is_absolute_url(src) {
        return src.to_string();
    }

    base.join(src).map_or_else(|_| src.to_string(), |resolved| resolved.to_string())
}
