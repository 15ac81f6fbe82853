//! Source-path classification.
//!
//! Pure functions deriving locale, version and content category from a
//! node's source location. Absence of a pattern match degrades to `None`
//! instead of failing; callers substitute the configured default locale
//! and the `master` version. Same input always yields the same output.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Locale folder markers in priority order. The first marker contained in a
/// source path decides the locale.
const LOCALE_FOLDERS: [(&str, Locale); 2] = [("/zh-CN/", Locale::Cn), ("/en/", Locale::En)];

/// Captures the version token following the release folder, e.g. `v1.0.0`
/// in `site/en/docs/versions/master/v1.0.0/overview.md`.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"versions/master/([v\dx\.]*)").expect("invalid version regex"));

/// Version sentinel assigned to preview content.
pub const PREVIEW_VERSION: &str = "preview";

/// A supported content language.
///
/// Exactly one locale is the site default; it omits its path prefix (see
/// `sitegen-routes`). All others get a locale-prefixed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Simplified Chinese (source folder `zh-CN`).
    Cn,
}

impl Locale {
    /// Locale code used in public paths and template contexts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the locale from a source path.
///
/// Tests containment of the known locale folder markers in priority order;
/// the first marker found wins. Returns `None` when no marker is present.
#[must_use]
pub fn find_locale(path: &str) -> Option<Locale> {
    LOCALE_FOLDERS
        .iter()
        .find(|(marker, _)| path.contains(marker))
        .map(|&(_, locale)| locale)
}

/// Extract the version token from a source path.
///
/// An empty capture resolves to [`PREVIEW_VERSION`] when preview mode is
/// active and the path carries the preview marker. Returns `None` when the
/// version is unrecoverable; callers substitute `master`.
#[must_use]
pub fn find_version(path: &str, preview: bool) -> Option<String> {
    let captures = VERSION_PATTERN.captures(path)?;
    let token = captures.get(1).map_or("", |m| m.as_str());
    if !token.is_empty() {
        return Some(token.to_owned());
    }
    if preview && path.contains(PREVIEW_VERSION) {
        return Some(PREVIEW_VERSION.to_owned());
    }
    None
}

/// Whether a source path belongs to the blog tree.
#[must_use]
pub fn is_blog(path: &str) -> bool {
    path.contains("blog")
}

/// Whether a source path belongs to the benchmark tree.
#[must_use]
pub fn is_benchmark(path: &str) -> bool {
    path.contains("benchmarks")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_locale_en() {
        assert_eq!(
            find_locale("/site/en/docs/versions/master/v1.0.0/overview.md"),
            Some(Locale::En)
        );
    }

    #[test]
    fn test_find_locale_cn() {
        assert_eq!(
            find_locale("/site/zh-CN/docs/versions/master/v1.0.0/overview.md"),
            Some(Locale::Cn)
        );
    }

    #[test]
    fn test_find_locale_no_marker() {
        assert_eq!(find_locale("/site/docs/overview.md"), None);
    }

    #[test]
    fn test_find_locale_priority_order() {
        // Both markers present: the higher-priority marker decides.
        assert_eq!(
            find_locale("/site/en/docs/zh-CN/page.md"),
            Some(Locale::Cn)
        );
    }

    #[test]
    fn test_find_version_token() {
        assert_eq!(
            find_version("/site/en/docs/versions/master/v1.0.0/overview.md", false),
            Some("v1.0.0".to_owned())
        );
    }

    #[test]
    fn test_find_version_partial_line() {
        assert_eq!(
            find_version("/site/en/docs/versions/master/v0.x/guide.md", false),
            Some("v0.x".to_owned())
        );
    }

    #[test]
    fn test_find_version_no_release_folder() {
        assert_eq!(find_version("/site/en/blog/announcement.md", false), None);
    }

    #[test]
    fn test_find_version_empty_capture() {
        assert_eq!(
            find_version("/site/en/docs/versions/master/common/faq.md", false),
            None
        );
    }

    #[test]
    fn test_find_version_preview_sentinel() {
        let path = "/site/en/docs/versions/master/preview/new_feature.md";
        assert_eq!(find_version(path, true), Some("preview".to_owned()));
        // Inactive preview mode never yields the sentinel.
        assert_eq!(find_version(path, false), None);
    }

    #[test]
    fn test_find_version_preview_requires_marker() {
        assert_eq!(
            find_version("/site/en/docs/versions/master/common/faq.md", true),
            None
        );
    }

    #[test]
    fn test_is_blog() {
        assert!(is_blog("/site/en/blog/release.md"));
        assert!(!is_blog("/site/en/docs/versions/master/v1.0.0/overview.md"));
    }

    #[test]
    fn test_is_benchmark() {
        assert!(is_benchmark("/site/en/docs/versions/benchmarks/report.md"));
        assert!(!is_benchmark("/site/en/blog/release.md"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let path = "/site/zh-CN/docs/versions/master/v1.1.x/setup.md";
        assert_eq!(find_locale(path), find_locale(path));
        assert_eq!(find_version(path, false), find_version(path, false));
    }
}
