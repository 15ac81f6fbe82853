//! Order-preserving partitions of the markdown node list.
//!
//! Filters never reorder their input: menu rendering order downstream
//! relies on content-index enumeration order. Nodes rejected here are
//! drafts or indexing artifacts and are silently dropped.

use crate::classify::find_version;
use crate::node::MarkdownNode;

/// Docs shared by every version line.
const COMMON_DOCS_MARKER: &str = "/docs/versions/master/common";
/// Translated blog posts live outside the release folders.
const BLOG_LOCALE_EXCEPTION: &str = "/blog/zh-CN";
/// Draft docs included only while preview mode is active.
const PREVIEW_DOCS_MARKER: &str = "/docs/versions/master/preview/";
/// Community article tree.
const COMMUNITY_ARTICLES_MARKER: &str = "communityArticles";
/// Benchmark report tree.
const BENCHMARK_DOCS_MARKER: &str = "/docs/versions/benchmarks/";

/// Keep markdown nodes eligible for doc-page generation.
///
/// A node survives when its version is resolvable or its path carries one
/// of the always-included markers, and its frontmatter id is non-empty.
#[must_use]
pub fn docs_with_version(nodes: &[MarkdownNode], preview: bool) -> Vec<&MarkdownNode> {
    nodes
        .iter()
        .filter(|node| {
            let path = node.file_absolute_path.as_str();
            let included = find_version(path, preview).is_some()
                || path.contains(COMMON_DOCS_MARKER)
                || path.contains(BLOG_LOCALE_EXCEPTION)
                || (preview && path.contains(PREVIEW_DOCS_MARKER))
                || path.contains(COMMUNITY_ARTICLES_MARKER)
                || path.contains(BENCHMARK_DOCS_MARKER);
            included && node.file_id().is_some()
        })
        .collect()
}

/// Keep community-article markdown nodes with a frontmatter id.
#[must_use]
pub fn community_articles(nodes: &[MarkdownNode]) -> Vec<&MarkdownNode> {
    nodes
        .iter()
        .filter(|node| {
            node.file_absolute_path.contains(COMMUNITY_ARTICLES_MARKER) && node.file_id().is_some()
        })
        .collect()
}
