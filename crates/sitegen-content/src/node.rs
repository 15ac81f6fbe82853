//! Content node types supplied by the content index.
//!
//! Nodes are immutable once loaded and owned by the indexing layer; this
//! subsystem only reads them. Rendered markup (`html`, `doc`) is opaque.

use serde::{Deserialize, Serialize};

/// A markdown heading with its nesting depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text.
    pub value: String,
    /// Nesting depth (1 = H1).
    pub depth: u8,
}

/// One markdown content node (doc, blog post, benchmark or community article).
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownNode {
    /// Source location of the markdown file.
    pub file_absolute_path: String,
    /// Stable content identifier from frontmatter. Nodes without one are
    /// excluded from page generation.
    #[serde(default)]
    pub id: Option<String>,
    /// Comma-separated search keywords from frontmatter.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Ordered headings extracted from the document.
    #[serde(default)]
    pub headings: Vec<Heading>,
    /// Rendered markup.
    #[serde(default)]
    pub html: Option<String>,
}

impl MarkdownNode {
    /// Frontmatter id, treating an empty string as absent.
    #[must_use]
    pub fn file_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// One flat API-reference record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReferenceNode {
    /// Anchor id within the reference document.
    pub link_id: String,
    /// Source location of the reference document.
    pub abspath: String,
    /// Reference entry name; last URL segment.
    pub name: String,
    /// Rendered reference body.
    pub doc: String,
    /// Cross-reference targets within the same reference set.
    #[serde(default)]
    pub hrefs: Vec<String>,
    /// API release the record belongs to.
    pub version: String,
    /// Reference category (client language or tool).
    pub category: String,
    /// Matching doc version; may be empty when no doc release lines up.
    #[serde(default)]
    pub doc_version: String,
}

/// A navigation menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Target content id or anchor.
    pub id: String,
    /// Whether this item is a non-link grouping node.
    #[serde(default)]
    pub is_menu: Option<bool>,
    /// Top-level grouping label.
    #[serde(default)]
    pub label1: String,
    /// Second-level grouping label.
    #[serde(default)]
    pub label2: String,
    /// Third-level grouping label.
    #[serde(default)]
    pub label3: String,
    /// Sort weight within the parent group.
    #[serde(default)]
    pub order: i64,
    /// External link target, when the item leaves the site.
    #[serde(default)]
    pub out_link: Option<String>,
    /// Display title.
    pub title: String,
}

/// Doc/blog navigation structure of one structured JSON node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuStructure {
    /// Menu items in source order.
    #[serde(default)]
    pub menu_list: Vec<MenuItem>,
}

/// Community structure of one structured JSON node.
///
/// Only `menu_list` is interpreted; the landing-page sections are passed
/// through verbatim to the template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStructure {
    /// Community navigation items; absent on pure landing documents.
    #[serde(default)]
    pub menu_list: Option<Vec<MenuItem>>,
    /// Landing-page sections, opaque to this subsystem.
    #[serde(flatten)]
    pub sections: serde_json::Map<String, serde_json::Value>,
}

/// One structured JSON node (menu, doc home or community data).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Source location of the JSON file.
    pub absolute_path: String,
    /// Doc/blog menu structure, when this node carries one.
    #[serde(default)]
    pub menu: Option<MenuStructure>,
    /// Community structure, when this node carries one.
    #[serde(default)]
    pub community: Option<CommunityStructure>,
    /// Doc-home landing data, passed through verbatim.
    #[serde(default)]
    pub doc_home: Option<serde_json::Value>,
}
