//! Template context payloads.
//!
//! Typed equivalents of the context objects handed to the site builder,
//! one per template family. Fields serialize in camelCase to match the
//! template contracts; fields the templates probe for `null` are kept as
//! always-serialized `Option`s, while fields that may be wholly absent
//! are skipped when unset.

use serde::Serialize;
use serde_json::Value;

use sitegen_content::{CommunityStructure, Heading, Locale};

use crate::community::CommunityMenu;
use crate::menus::{ApiMenuEntry, MenuSet};

/// Context payload of a registered page.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum PageContext<'a> {
    /// Doc pages, blog posts, benchmarks and the doc home.
    Doc(DocContext<'a>),
    /// API-reference pages.
    Api(ApiContext<'a>),
    /// Community articles and the community home.
    Community(CommunityContext<'a>),
}

/// Context for the doc template.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocContext<'a> {
    /// Page locale.
    pub locale: Locale,
    /// Version shown by this route.
    pub version: &'a str,
    /// All known doc versions, newest first.
    pub versions: &'a [String],
    /// Version currently designated as newest.
    pub newest_version: &'a str,
    /// Active page id (`home` on the doc home).
    pub old: &'a str,
    /// Headings rendered in the right-hand outline; absent on the doc home.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<Heading>>,
    /// Source location of the content node.
    pub file_absolute_path: &'a str,
    /// Canonical localized path of the page; absent on the doc home.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_path: Option<&'a str>,
    /// Whether the page belongs to the blog tree.
    pub is_blog: bool,
    /// Path suffix after the locale folder, for "edit this page" links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_path: Option<String>,
    /// Every aggregated navigation menu.
    pub all_menus: &'a MenuSet,
    /// Whether the page belongs to the benchmark tree; absent on
    /// master-alias routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_benchmark: Option<bool>,
    /// Rendered markup; null on the doc home.
    pub new_html: Option<&'a str>,
    /// Landing data; null on every route except the doc home.
    pub home_data: Option<&'a Value>,
    /// Flat API-reference menu list.
    pub all_api_menus: &'a [ApiMenuEntry],
}

/// Context for the API-reference template.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContext<'a> {
    /// Page locale; reference content is locale-invariant but must be
    /// reachable under both locale trees.
    pub locale: Locale,
    /// Source location of the reference document.
    pub abspath: &'a str,
    /// Rendered reference body.
    pub doc: &'a str,
    /// Anchor id within the reference document.
    pub link_id: &'a str,
    /// Cross-reference targets.
    pub hrefs: &'a [String],
    /// Reference entry name.
    pub name: &'a str,
    /// Flat API-reference menu list.
    pub all_api_menus: &'a [ApiMenuEntry],
    /// Every aggregated navigation menu.
    pub all_menus: &'a MenuSet,
    /// API release of the record.
    pub version: &'a str,
    /// Matching doc version; may be empty.
    pub doc_version: &'a str,
    /// All known doc versions, newest first.
    pub doc_versions: &'a [String],
    /// Reference category.
    pub category: &'a str,
}

/// Context for the community template.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityContext<'a> {
    /// Page locale.
    pub locale: Locale,
    /// Source location of the content node.
    pub file_absolute_path: &'a str,
    /// Rendered markup; null on the community home.
    pub html: Option<&'a str>,
    /// Headings rendered in the article outline; empty on the home.
    pub headings: Vec<Heading>,
    /// Per-locale community navigation menus.
    pub menu_list: &'a [CommunityMenu],
    /// Landing data; null on article routes.
    pub home_data: Option<&'a CommunityStructure>,
    /// Active article id (`community` on the home).
    pub active_post: &'a str,
}
