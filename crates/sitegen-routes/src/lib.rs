//! Public route paths for the documentation website.
//!
//! Pure formatting rules mapping a classified content node to its public
//! URL. Two conventions keep internal links stable:
//! - the default locale omits its path prefix entirely;
//! - the current (`master`) version omits its version segment, so links to
//!   current docs never go stale when a new version becomes current.
//!
//! Non-default locales carry no leading slash before the locale segment
//! (`cn/docs/overview`); the site builder treats both forms as rooted.

use sitegen_content::Locale;

/// Version line treated as current/unreleased.
pub const MASTER_VERSION: &str = "master";

/// Computes public paths with locale-default omission and version folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathGenerator {
    default_locale: Locale,
}

impl PathGenerator {
    /// Create a generator that omits the prefix for `default_locale`.
    #[must_use]
    pub fn new(default_locale: Locale) -> Self {
        Self { default_locale }
    }

    /// Locale whose prefix is omitted.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Public path for a doc page, blog post or benchmark report.
    ///
    /// An unset `locale` behaves as the default locale. Benchmark paths
    /// ignore the version entirely (benchmark pages are pinned to the
    /// newest version by the emitter). Blog paths drop the locale prefix
    /// when `include_locale_prefix` is off: the search index is locale
    /// agnostic. Doc paths fold the `master` version away.
    #[must_use]
    pub fn page_path(
        &self,
        id: &str,
        locale: Option<Locale>,
        version: Option<&str>,
        is_blog: bool,
        include_locale_prefix: bool,
        is_benchmark: bool,
    ) -> String {
        let locale = locale.unwrap_or(self.default_locale);
        if is_benchmark {
            return if locale == self.default_locale {
                format!("/docs/{id}")
            } else {
                format!("{locale}/docs/{id}")
            };
        }
        if is_blog {
            if !include_locale_prefix || locale == self.default_locale {
                return format!("/blogs/{id}");
            }
            return format!("{locale}/blogs/{id}");
        }
        if !include_locale_prefix {
            return id.to_owned();
        }

        let prefix = match version {
            Some(version) if version != MASTER_VERSION => {
                if locale == self.default_locale {
                    format!("/docs/{version}/")
                } else {
                    format!("{locale}/docs/{version}/")
                }
            }
            _ => {
                if locale == self.default_locale {
                    "/docs/".to_owned()
                } else {
                    format!("{locale}/docs/")
                }
            }
        };
        format!("{prefix}{id}")
    }

    /// Public path for a community article.
    #[must_use]
    pub fn community_path(&self, id: &str, locale: Option<Locale>) -> String {
        let locale = locale.unwrap_or(self.default_locale);
        if locale == self.default_locale {
            format!("/community/{id}")
        } else {
            format!("{locale}/community/{id}")
        }
    }
}

/// Public path for an API-reference page.
#[must_use]
pub fn api_reference_path(category: &str, version: &str, name: &str) -> String {
    format!("/api-reference/{category}/{version}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> PathGenerator {
        PathGenerator::new(Locale::En)
    }

    #[test]
    fn test_doc_master_version_default_locale() {
        let path = paths().page_path("x", Some(Locale::En), Some("master"), false, true, false);
        assert_eq!(path, "/docs/x");
    }

    #[test]
    fn test_doc_master_version_other_locale() {
        let path = paths().page_path("x", Some(Locale::Cn), Some("master"), false, true, false);
        assert_eq!(path, "cn/docs/x");
    }

    #[test]
    fn test_doc_pinned_version() {
        let path = paths().page_path("x", Some(Locale::En), Some("v2.0"), false, true, false);
        assert_eq!(path, "/docs/v2.0/x");

        let path = paths().page_path("x", Some(Locale::Cn), Some("v2.0"), false, true, false);
        assert_eq!(path, "cn/docs/v2.0/x");
    }

    #[test]
    fn test_doc_unset_version_folds_like_master() {
        let path = paths().page_path("x", Some(Locale::En), None, false, true, false);
        assert_eq!(path, "/docs/x");
    }

    #[test]
    fn test_doc_unset_locale_behaves_as_default() {
        let path = paths().page_path("x", None, Some("v2.0"), false, true, false);
        assert_eq!(path, "/docs/v2.0/x");
    }

    #[test]
    fn test_doc_without_locale_prefix_is_bare_id() {
        let path = paths().page_path("x", Some(Locale::Cn), Some("v2.0"), false, false, false);
        assert_eq!(path, "x");
    }

    #[test]
    fn test_blog_paths() {
        let path = paths().page_path("post", Some(Locale::En), Some("v1.0"), true, true, false);
        assert_eq!(path, "/blogs/post");

        let path = paths().page_path("post", Some(Locale::Cn), Some("v1.0"), true, true, false);
        assert_eq!(path, "cn/blogs/post");
    }

    #[test]
    fn test_blog_without_locale_prefix_is_locale_agnostic() {
        let path = paths().page_path("post", Some(Locale::Cn), None, true, false, false);
        assert_eq!(path, "/blogs/post");
    }

    #[test]
    fn test_benchmark_ignores_version() {
        let path = paths().page_path("b1", Some(Locale::En), Some("v1.0"), false, true, true);
        assert_eq!(path, "/docs/b1");

        let path = paths().page_path("b1", Some(Locale::Cn), Some("v1.0"), false, true, true);
        assert_eq!(path, "cn/docs/b1");
    }

    #[test]
    fn test_community_paths() {
        assert_eq!(paths().community_path("welcome", Some(Locale::En)), "/community/welcome");
        assert_eq!(
            paths().community_path("welcome", Some(Locale::Cn)),
            "cn/community/welcome"
        );
        assert_eq!(paths().community_path("welcome", None), "/community/welcome");
    }

    #[test]
    fn test_api_reference_path() {
        assert_eq!(
            api_reference_path("pyclient", "v1.0.0", "connect.html"),
            "/api-reference/pyclient/v1.0.0/connect.html"
        );
    }

    #[test]
    fn test_cn_default_locale_flips_omission() {
        let generator = PathGenerator::new(Locale::Cn);
        assert_eq!(
            generator.page_path("x", Some(Locale::Cn), None, false, true, false),
            "/docs/x"
        );
        assert_eq!(
            generator.page_path("x", Some(Locale::En), None, false, true, false),
            "en/docs/x"
        );
    }
}
