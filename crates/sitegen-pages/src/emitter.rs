//! Page emission.
//!
//! Walks the filtered content subsets, computes one or two routes per
//! node and registers each page-build request with the injected
//! [`PageSink`]. Classification misses degrade to defaults and are never
//! surfaced; path collisions are the external builder's concern.
//!
//! A doc whose version equals the designated newest version gets a second
//! route at the unversioned path, so the current docs stay reachable
//! through stable links while the version line is newest.

use serde::Serialize;

use sitegen_content::{
    ContentIndex, Heading, Locale, MarkdownNode, docs_with_version, find_locale, find_version,
    is_benchmark, is_blog,
};
use sitegen_routes::{MASTER_VERSION, PathGenerator, api_reference_path};

use crate::community::{CommunityData, community_data};
use crate::context::{ApiContext, CommunityContext, DocContext, PageContext};
use crate::menus::{ApiMenuEntry, HomeSet, MenuSet, api_menus};
use crate::sink::{PageSink, SinkError};

/// Template family rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Doc pages, blog posts, benchmarks and the doc home.
    Doc,
    /// API-reference pages.
    ApiDoc,
    /// Community articles and the community home.
    Community,
}

/// A page-build request: public path, template and context payload.
#[derive(Clone, Debug, Serialize)]
pub struct Route<'a> {
    /// Public path of the page.
    pub path: String,
    /// Template rendering the page.
    pub template: Template,
    /// Payload handed to the template.
    pub context: PageContext<'a>,
}

/// Configuration for [`PageEmitter`].
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Locale that omits its path prefix.
    pub default_locale: Locale,
    /// Known doc versions, newest first.
    pub versions: Vec<String>,
    /// Version currently designated as newest; its docs get unversioned
    /// alias routes.
    pub newest_version: String,
    /// Include preview content and the preview version sentinel.
    pub preview: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            versions: Vec::new(),
            newest_version: MASTER_VERSION.to_owned(),
            preview: false,
        }
    }
}

/// Counts of registered pages per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Doc, blog and benchmark pages.
    pub doc_pages: usize,
    /// Unversioned alias routes for the newest version.
    pub doc_aliases: usize,
    /// Doc-home landing pages.
    pub doc_homes: usize,
    /// Community articles.
    pub community_articles: usize,
    /// Community landing pages.
    pub community_homes: usize,
    /// API-reference pages (two per record).
    pub api_references: usize,
}

impl EmitSummary {
    /// Total number of registered pages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.doc_pages
            + self.doc_aliases
            + self.doc_homes
            + self.community_articles
            + self.community_homes
            + self.api_references
    }
}

/// Orchestrates route computation over a content index.
///
/// Stateless between runs: every aggregation structure is rebuilt from
/// the full node list on each [`emit_all`](Self::emit_all) call.
pub struct PageEmitter {
    config: EmitterConfig,
    paths: PathGenerator,
}

impl PageEmitter {
    /// Create an emitter for the given configuration.
    #[must_use]
    pub fn new(config: EmitterConfig) -> Self {
        let paths = PathGenerator::new(config.default_locale);
        Self { config, paths }
    }

    /// Generate every route for the content index and register each with
    /// `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SinkError`] reported by the builder; generation
    /// stops at that point.
    pub fn emit_all(
        &self,
        index: &ContentIndex,
        sink: &mut dyn PageSink,
    ) -> Result<EmitSummary, SinkError> {
        let all_menus = MenuSet::from_files(&index.files, self.config.preview);
        let home_data = HomeSet::from_files(&index.files, self.config.preview);
        let all_api_menus = api_menus(&index.api_files);
        let community = community_data(&index.markdown, &index.files);
        let legal_docs = docs_with_version(&index.markdown, self.config.preview);

        tracing::debug!(
            docs = legal_docs.len(),
            menus = all_menus.len(),
            api = index.api_files.len(),
            "Content classified"
        );

        let mut summary = EmitSummary::default();
        self.emit_doc_pages(&legal_docs, &all_menus, &all_api_menus, sink, &mut summary)?;
        self.emit_doc_home(&home_data, &all_menus, &all_api_menus, sink, &mut summary)?;
        self.emit_community_articles(&community, sink, &mut summary)?;
        self.emit_community_home(&community, sink, &mut summary)?;
        self.emit_api_reference(index, &all_menus, &all_api_menus, sink, &mut summary)?;

        tracing::info!(pages = summary.total(), "Page generation complete");
        Ok(summary)
    }

    /// Register doc, blog and benchmark pages, plus unversioned aliases
    /// for the newest version.
    fn emit_doc_pages(
        &self,
        nodes: &[&MarkdownNode],
        all_menus: &MenuSet,
        all_api_menus: &[ApiMenuEntry],
        sink: &mut dyn PageSink,
        summary: &mut EmitSummary,
    ) -> Result<(), SinkError> {
        for node in nodes {
            let path = node.file_absolute_path.as_str();
            let Some(file_id) = node.file_id() else {
                continue;
            };

            let locale = find_locale(path);
            let version = find_version(path, self.config.preview)
                .unwrap_or_else(|| MASTER_VERSION.to_owned());
            let blog = is_blog(path);
            let benchmark = is_benchmark(path);
            let edit_path = edit_path(path, locale);
            let localized_path =
                self.paths
                    .page_path(file_id, locale, Some(&version), blog, true, benchmark);
            let headings = doc_headings(&node.headings);

            if version == self.config.newest_version {
                // The newest docs stay reachable at the unversioned path.
                let alias_path = if benchmark {
                    format!("/docs/{file_id}")
                } else {
                    self.paths
                        .page_path(file_id, locale, Some(MASTER_VERSION), blog, true, false)
                };
                sink.register_page(&Route {
                    path: alias_path,
                    template: Template::Doc,
                    context: PageContext::Doc(DocContext {
                        locale: locale.unwrap_or(self.config.default_locale),
                        version: &self.config.newest_version,
                        versions: &self.config.versions,
                        newest_version: &self.config.newest_version,
                        old: file_id,
                        headings: Some(headings.clone()),
                        file_absolute_path: path,
                        localized_path: Some(localized_path.as_str()),
                        is_blog: blog,
                        edit_path: edit_path.clone(),
                        all_menus,
                        is_benchmark: None,
                        new_html: node.html.as_deref(),
                        home_data: None,
                        all_api_menus,
                    }),
                })?;
                summary.doc_aliases += 1;
            }

            // Benchmark pages are pinned to the newest version.
            let context_version = if benchmark {
                self.config.newest_version.as_str()
            } else {
                version.as_str()
            };
            sink.register_page(&Route {
                path: localized_path.clone(),
                template: Template::Doc,
                context: PageContext::Doc(DocContext {
                    locale: locale.unwrap_or(self.config.default_locale),
                    version: context_version,
                    versions: &self.config.versions,
                    newest_version: &self.config.newest_version,
                    old: file_id,
                    headings: Some(headings),
                    file_absolute_path: path,
                    localized_path: Some(localized_path.as_str()),
                    is_blog: blog,
                    edit_path,
                    all_menus,
                    is_benchmark: Some(benchmark),
                    new_html: node.html.as_deref(),
                    home_data: None,
                    all_api_menus,
                }),
            })?;
            summary.doc_pages += 1;
        }
        Ok(())
    }

    /// Register one doc-home landing page per locale/version entry.
    fn emit_doc_home(
        &self,
        home_data: &HomeSet,
        all_menus: &MenuSet,
        all_api_menus: &[ApiMenuEntry],
        sink: &mut dyn PageSink,
        summary: &mut EmitSummary,
    ) -> Result<(), SinkError> {
        for entry in home_data.entries() {
            let path = if entry.language == self.config.default_locale {
                "/docs/home".to_owned()
            } else {
                format!("/{}/docs/home", entry.language)
            };
            sink.register_page(&Route {
                path,
                template: Template::Doc,
                context: PageContext::Doc(DocContext {
                    locale: entry.language,
                    version: &entry.version,
                    versions: &self.config.versions,
                    newest_version: &self.config.newest_version,
                    old: "home",
                    headings: None,
                    file_absolute_path: &entry.path,
                    localized_path: None,
                    is_blog: is_blog(&entry.path),
                    edit_path: edit_path(&entry.path, Some(entry.language)),
                    all_menus,
                    is_benchmark: None,
                    new_html: None,
                    home_data: Some(&entry.data),
                    all_api_menus,
                }),
            })?;
            summary.doc_homes += 1;
        }
        Ok(())
    }

    /// Register one page per community article.
    fn emit_community_articles(
        &self,
        community: &CommunityData<'_>,
        sink: &mut dyn PageSink,
        summary: &mut EmitSummary,
    ) -> Result<(), SinkError> {
        for node in &community.articles {
            let path = node.file_absolute_path.as_str();
            let Some(file_id) = node.file_id() else {
                continue;
            };
            let locale = find_locale(path);
            sink.register_page(&Route {
                path: self.paths.community_path(file_id, locale),
                template: Template::Community,
                context: PageContext::Community(CommunityContext {
                    locale: locale.unwrap_or(self.config.default_locale),
                    file_absolute_path: path,
                    html: node.html.as_deref(),
                    headings: article_headings(&node.headings),
                    menu_list: &community.menus,
                    home_data: None,
                    active_post: file_id,
                }),
            })?;
            summary.community_articles += 1;
        }
        Ok(())
    }

    /// Register one community landing page per locale.
    fn emit_community_home(
        &self,
        community: &CommunityData<'_>,
        sink: &mut dyn PageSink,
        summary: &mut EmitSummary,
    ) -> Result<(), SinkError> {
        for home in &community.home {
            let path = if home.language == self.config.default_locale {
                "/community".to_owned()
            } else {
                format!("/{}/community", home.language)
            };
            sink.register_page(&Route {
                path,
                template: Template::Community,
                context: PageContext::Community(CommunityContext {
                    locale: home.language,
                    file_absolute_path: &home.path,
                    html: None,
                    headings: Vec::new(),
                    menu_list: &community.menus,
                    home_data: Some(&home.data),
                    active_post: "community",
                }),
            })?;
            summary.community_homes += 1;
        }
        Ok(())
    }

    /// Register two pages per API-reference record, one under each locale
    /// tree.
    fn emit_api_reference(
        &self,
        index: &ContentIndex,
        all_menus: &MenuSet,
        all_api_menus: &[ApiMenuEntry],
        sink: &mut dyn PageSink,
        summary: &mut EmitSummary,
    ) -> Result<(), SinkError> {
        for node in &index.api_files {
            let path = api_reference_path(&node.category, &node.version, &node.name);
            for locale in [Locale::En, Locale::Cn] {
                let route_path = if locale == Locale::En {
                    path.clone()
                } else {
                    format!("/cn{path}")
                };
                sink.register_page(&Route {
                    path: route_path,
                    template: Template::ApiDoc,
                    context: PageContext::Api(ApiContext {
                        locale,
                        abspath: &node.abspath,
                        doc: &node.doc,
                        link_id: &node.link_id,
                        hrefs: &node.hrefs,
                        name: &node.name,
                        all_api_menus,
                        all_menus,
                        version: &node.version,
                        doc_version: &node.doc_version,
                        doc_versions: &self.config.versions,
                        category: &node.category,
                    }),
                })?;
                summary.api_references += 1;
            }
        }
        Ok(())
    }
}

/// Path suffix after the locale folder, used for "edit this page" links.
fn edit_path(path: &str, locale: Option<Locale>) -> Option<String> {
    let marker = match locale {
        Some(Locale::En) => "/en/",
        _ => "/zh-CN/",
    };
    path.find(marker)
        .map(|idx| path[idx + marker.len()..].to_owned())
}

/// Outline headings for doc pages (H1 through H3).
fn doc_headings(headings: &[Heading]) -> Vec<Heading> {
    headings
        .iter()
        .filter(|h| h.depth >= 1 && h.depth < 4)
        .cloned()
        .collect()
}

/// Outline headings for community articles (H2 and H3 only).
fn article_headings(headings: &[Heading]) -> Vec<Heading> {
    headings
        .iter()
        .filter(|h| h.depth > 1 && h.depth < 4)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    // The emitter holds no interior mutability and is safe to share.
    static_assertions::assert_impl_all!(super::PageEmitter: Send, Sync);

    use serde_json::Value;
    use sitegen_content::ContentIndex;

    use super::*;
    use crate::sink::RecordingSink;

    fn fixture_index() -> ContentIndex {
        ContentIndex::from_json(
            r#"{
                "markdown": [
                    {"fileAbsolutePath": "/site/en/docs/versions/master/v2.0.0/overview.md",
                     "id": "overview", "html": "<p>v2</p>",
                     "headings": [{"value": "Overview", "depth": 1},
                                  {"value": "Details", "depth": 2},
                                  {"value": "Fine print", "depth": 4}]},
                    {"fileAbsolutePath": "/site/zh-CN/docs/versions/master/v1.0.0/overview.md",
                     "id": "overview", "html": "<p>v1</p>"},
                    {"fileAbsolutePath": "/site/en/docs/versions/benchmarks/sift.md",
                     "id": "sift", "html": "<p>bench</p>"},
                    {"fileAbsolutePath": "/site/blog/zh-CN/release.md",
                     "id": "release", "html": "<p>post</p>"},
                    {"fileAbsolutePath": "/site/en/communityArticles/welcome.md",
                     "id": "welcome", "html": "<p>hi</p>",
                     "headings": [{"value": "Welcome", "depth": 1},
                                  {"value": "Getting involved", "depth": 2}]},
                    {"fileAbsolutePath": "/site/en/docs/versions/master/v2.0.0/draft.md"}
                ],
                "apiFiles": [
                    {"linkId": "connect", "abspath": "/api/pyclient/v1.0.0/connect.html",
                     "name": "connect.html", "doc": "<p>connect</p>", "version": "v1.0.0",
                     "category": "pyclient", "docVersion": "v1.0.0"}
                ],
                "files": [
                    {"absolutePath": "/site/en/docs/versions/master/v2.0.0/menuStructure/en.json",
                     "menu": {"menuList": [{"id": "overview", "title": "Overview"}]}},
                    {"absolutePath": "/site/en/home/en.json",
                     "docHome": {"section1": {"title": "Start"}}},
                    {"absolutePath": "/site/en/communityHome/en.json",
                     "community": {"heroSection": {"title": "Join us"}}},
                    {"absolutePath": "/site/en/community/en.json",
                     "community": {"menuList": [{"id": "events", "title": "Events"}]}}
                ]
            }"#,
        )
        .unwrap()
    }

    fn emitter() -> PageEmitter {
        PageEmitter::new(EmitterConfig {
            default_locale: Locale::En,
            versions: vec!["v2.0.0".to_owned(), "v1.0.0".to_owned()],
            newest_version: "v2.0.0".to_owned(),
            preview: false,
        })
    }

    fn emit(index: &ContentIndex) -> (EmitSummary, Vec<Value>) {
        let mut sink = RecordingSink::new();
        let summary = emitter().emit_all(index, &mut sink).unwrap();
        (summary, sink.into_pages())
    }

    fn pages_at<'a>(pages: &'a [Value], path: &str) -> Vec<&'a Value> {
        pages.iter().filter(|p| p["path"] == path).collect()
    }

    #[test]
    fn test_newest_version_doc_yields_two_routes() {
        let (_, pages) = emit(&fixture_index());
        // Alias at the unversioned path plus the versioned route.
        assert_eq!(pages_at(&pages, "/docs/overview").len(), 1);
        assert_eq!(pages_at(&pages, "/docs/v2.0.0/overview").len(), 1);
    }

    #[test]
    fn test_older_version_doc_yields_one_route() {
        let (_, pages) = emit(&fixture_index());
        assert_eq!(pages_at(&pages, "cn/docs/v1.0.0/overview").len(), 1);
        assert!(pages_at(&pages, "cn/docs/overview").is_empty());
    }

    #[test]
    fn test_alias_route_context_shape() {
        let (_, pages) = emit(&fixture_index());
        let alias = pages_at(&pages, "/docs/overview")[0];
        assert_eq!(alias["context"]["version"], "v2.0.0");
        assert_eq!(alias["context"]["old"], "overview");
        assert_eq!(alias["context"]["localizedPath"], "/docs/v2.0.0/overview");
        // Alias contexts never carry the benchmark flag.
        assert!(alias["context"].get("isBenchmark").is_none());

        let versioned = pages_at(&pages, "/docs/v2.0.0/overview")[0];
        assert_eq!(versioned["context"]["isBenchmark"], false);
        assert_eq!(
            versioned["context"]["editPath"],
            "docs/versions/master/v2.0.0/overview.md"
        );
    }

    #[test]
    fn test_headings_filtered_to_outline_depths() {
        let (_, pages) = emit(&fixture_index());
        let versioned = pages_at(&pages, "/docs/v2.0.0/overview")[0];
        let headings = versioned["context"]["headings"].as_array().unwrap();
        // Depth-4 headings stay out of the outline.
        assert_eq!(headings.len(), 2);
    }

    #[test]
    fn test_benchmark_pinned_to_newest_version() {
        let index = ContentIndex::from_json(
            r#"{"markdown": [
                {"fileAbsolutePath": "/site/en/docs/versions/benchmarks/sift.md",
                 "id": "sift", "html": "<p>bench</p>"}
            ]}"#,
        )
        .unwrap();
        let (summary, pages) = emit(&index);
        assert_eq!(summary.doc_pages, 1);
        assert_eq!(summary.doc_aliases, 0);
        let bench = pages_at(&pages, "/docs/sift")[0];
        assert_eq!(bench["context"]["version"], "v2.0.0");
        assert_eq!(bench["context"]["isBenchmark"], true);
    }

    #[test]
    fn test_benchmark_alias_when_newest() {
        // A benchmark classified at the newest version keeps a single
        // well-formed alias path.
        let index = ContentIndex::from_json(
            r#"{"markdown": [
                {"fileAbsolutePath": "/site/en/docs/versions/master/v2.0.0/benchmarks/sift.md",
                 "id": "sift", "html": "<p>bench</p>"}
            ]}"#,
        )
        .unwrap();
        let (summary, pages) = emit(&index);
        assert_eq!(summary.doc_aliases, 1);
        assert_eq!(summary.doc_pages, 1);
        // Alias and versioned route collapse onto the same benchmark path.
        assert_eq!(pages_at(&pages, "/docs/sift").len(), 2);
    }

    #[test]
    fn test_blog_routes() {
        // Translated blog posts carry no version folder; the blog-locale
        // exception keeps them in doc-page generation.
        let (_, pages) = emit(&fixture_index());
        assert_eq!(pages_at(&pages, "cn/blogs/release").len(), 1);
        let blog = pages_at(&pages, "cn/blogs/release")[0];
        assert_eq!(blog["context"]["isBlog"], true);
        assert_eq!(blog["context"]["version"], "master");
        assert_eq!(blog["context"]["locale"], "cn");
    }

    #[test]
    fn test_community_articles_also_get_doc_routes() {
        // Community articles survive the doc filter and get a doc route in
        // addition to their community route.
        let (_, pages) = emit(&fixture_index());
        assert_eq!(pages_at(&pages, "/docs/welcome").len(), 1);
        assert_eq!(pages_at(&pages, "/community/welcome").len(), 1);
    }

    #[test]
    fn test_summary_counts() {
        let (summary, pages) = emit(&fixture_index());
        assert_eq!(summary.doc_pages, 5);
        assert_eq!(summary.doc_aliases, 1);
        assert_eq!(summary.doc_homes, 1);
        assert_eq!(summary.community_articles, 1);
        assert_eq!(summary.community_homes, 1);
        assert_eq!(summary.api_references, 2);
        assert_eq!(summary.total(), pages.len());
    }

    #[test]
    fn test_doc_without_id_is_dropped() {
        let (_, pages) = emit(&fixture_index());
        assert!(
            pages
                .iter()
                .all(|p| p["context"]["fileAbsolutePath"] != "/site/en/docs/versions/master/v2.0.0/draft.md")
        );
    }

    #[test]
    fn test_api_record_yields_two_routes() {
        let (summary, pages) = emit(&fixture_index());
        assert_eq!(summary.api_references, 2);
        let en = pages_at(&pages, "/api-reference/pyclient/v1.0.0/connect.html");
        let cn = pages_at(&pages, "/cn/api-reference/pyclient/v1.0.0/connect.html");
        assert_eq!(en.len(), 1);
        assert_eq!(cn.len(), 1);
        assert_eq!(en[0]["context"]["locale"], "en");
        assert_eq!(cn[0]["context"]["locale"], "cn");
        // Everything but the locale matches.
        assert_eq!(en[0]["context"]["doc"], cn[0]["context"]["doc"]);
        assert_eq!(en[0]["context"]["docVersions"], cn[0]["context"]["docVersions"]);
    }

    #[test]
    fn test_community_routes() {
        let (summary, pages) = emit(&fixture_index());
        assert_eq!(summary.community_articles, 1);
        assert_eq!(summary.community_homes, 1);

        let article = pages_at(&pages, "/community/welcome")[0];
        assert_eq!(article["context"]["activePost"], "welcome");
        // H1 stays out of the article outline.
        assert_eq!(article["context"]["headings"].as_array().unwrap().len(), 1);
        assert!(article["context"]["homeData"].is_null());

        let home = pages_at(&pages, "/community")[0];
        assert_eq!(home["context"]["activePost"], "community");
        assert!(home["context"]["html"].is_null());
        assert_eq!(home["context"]["homeData"]["heroSection"]["title"], "Join us");
    }

    #[test]
    fn test_doc_home_route() {
        let (summary, pages) = emit(&fixture_index());
        assert_eq!(summary.doc_homes, 1);
        let home = pages_at(&pages, "/docs/home")[0];
        assert_eq!(home["context"]["old"], "home");
        assert!(home["context"]["newHtml"].is_null());
        assert_eq!(home["context"]["homeData"]["section1"]["title"], "Start");
        assert!(home["context"].get("localizedPath").is_none());
    }

    #[test]
    fn test_routes_carry_aggregated_menus() {
        let (_, pages) = emit(&fixture_index());
        let versioned = pages_at(&pages, "/docs/v2.0.0/overview")[0];
        let menus = versioned["context"]["allMenus"].as_array().unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0]["version"], "v2.0.0");
        let api_menus = versioned["context"]["allApiMenus"].as_array().unwrap();
        assert_eq!(api_menus[0]["label1"], "api_reference");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let index = fixture_index();
        let (summary_a, pages_a) = emit(&index);
        let (summary_b, pages_b) = emit(&index);
        assert_eq!(summary_a, summary_b);
        assert_eq!(pages_a, pages_b);
    }

    #[test]
    fn test_sink_error_aborts_generation() {
        struct FailingSink;
        impl PageSink for FailingSink {
            fn register_page(&mut self, route: &Route<'_>) -> Result<(), SinkError> {
                Err(SinkError::new(route.path.clone(), "builder unavailable"))
            }
        }

        let result = emitter().emit_all(&fixture_index(), &mut FailingSink);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_index_registers_nothing() {
        let (summary, pages) = emit(&ContentIndex::default());
        assert_eq!(summary.total(), 0);
        assert!(pages.is_empty());
    }
}
