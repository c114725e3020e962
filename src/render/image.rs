//! Deterministic image fallback resolution.
//!
//! Resolution order: record thumbnail → logo service keyed by the record
//! URL's hostname → generic placeholder when the URL does not parse. A
//! host-reported load failure substitutes a static inline graphic exactly
//! once per slot; no retries.

use crate::catalog::ToolRecord;
use crate::types::MediaConfig;
use serde::Serialize;
use url::Url;

/// Inline placeholder substituted on load failure. A data URL, so the
/// substitution can never trigger another network request.
pub const INLINE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"150\"%3E%3Crect fill=\"%231a1a1a\" width=\"200\" height=\"150\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\" fill=\"%23666\" font-size=\"40\"%3E%F0%9F%A4%96%3C/text%3E%3C/svg%3E";

/// Resolved display image for one rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    src: String,
    failed: bool,
}

impl ImageSlot {
    /// Resolve the display source for a record.
    pub fn resolve(record: &ToolRecord, media: &MediaConfig) -> Self {
        let src = match record.image.as_deref() {
            Some(image) if !image.is_empty() => image.to_string(),
            _ => logo_url(&record.url, media),
        };
        Self { src, failed: false }
    }

    /// Current display source.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Host-reported load failure.
    ///
    /// The first report swaps in [`INLINE_PLACEHOLDER`] and returns `true`.
    /// Every later report on the same slot is a no-op returning `false`.
    pub fn mark_load_failed(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        self.src = INLINE_PLACEHOLDER.to_string();
        true
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

/// Derive a logo-service URL from the hostname of the record URL.
///
/// Malformed URLs are caught here and degrade to the generic placeholder —
/// they never propagate.
fn logo_url(tool_url: &str, media: &MediaConfig) -> String {
    match Url::parse(tool_url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}/{}", media.logo_service, host),
            None => {
                tracing::debug!(url = tool_url, "record URL has no host, using placeholder");
                media.placeholder.clone()
            }
        },
        Err(error) => {
            tracing::debug!(url = tool_url, %error, "record URL failed to parse, using placeholder");
            media.placeholder.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::record;

    fn media() -> MediaConfig {
        MediaConfig::default()
    }

    #[test]
    fn test_explicit_image_wins() {
        let mut r = record("A", "X");
        r.image = Some("https://cdn.example.com/a.png".to_string());
        let slot = ImageSlot::resolve(&r, &media());
        assert_eq!(slot.src(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_empty_image_falls_back_to_logo_service() {
        let mut r = record("A", "X");
        r.image = Some(String::new());
        r.url = "https://tools.example.com/path?q=1".to_string();
        let slot = ImageSlot::resolve(&r, &media());
        assert_eq!(slot.src(), "https://logo.clearbit.com/tools.example.com");
    }

    #[test]
    fn test_missing_image_uses_hostname() {
        let mut r = record("A", "X");
        r.url = "https://sub.domain.io".to_string();
        let slot = ImageSlot::resolve(&r, &media());
        assert_eq!(slot.src(), "https://logo.clearbit.com/sub.domain.io");
    }

    #[test]
    fn test_unparseable_url_uses_placeholder() {
        let mut r = record("A", "X");
        r.url = "not a url".to_string();
        let slot = ImageSlot::resolve(&r, &media());
        assert_eq!(slot.src(), media().placeholder);
    }

    #[test]
    fn test_hostless_url_uses_placeholder() {
        let mut r = record("A", "X");
        r.url = "mailto:someone@example.com".to_string();
        let slot = ImageSlot::resolve(&r, &media());
        assert_eq!(slot.src(), media().placeholder);
    }

    #[test]
    fn test_load_failure_substitutes_exactly_once() {
        let r = record("A", "X");
        let mut slot = ImageSlot::resolve(&r, &media());
        let original = slot.src().to_string();

        assert!(slot.mark_load_failed());
        assert_ne!(slot.src(), original);
        assert_eq!(slot.src(), INLINE_PLACEHOLDER);
        assert!(slot.has_failed());

        // Second report: no state change, no further action
        let after_first = slot.clone();
        assert!(!slot.mark_load_failed());
        assert_eq!(slot, after_first);
    }
}
