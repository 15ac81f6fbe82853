//! Global search-index generation.
//!
//! The index is a flat JSON array of searchable records restricted to the
//! newest version. Building it is pure; writing it is a single
//! all-or-nothing file write whose failure aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use sitegen_content::{MarkdownNode, find_locale, find_version, is_benchmark, is_blog};
use sitegen_routes::{MASTER_VERSION, PathGenerator};

/// One searchable record in the global index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Frontmatter id of the source node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Frontmatter keywords, passed through unsplit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Source locale code; empty when no locale folder was recognized.
    pub file_lang: String,
    /// Version the record belongs to.
    pub version: String,
    /// Public path of the page; locale-agnostic for blogs, bare id for docs.
    pub path: String,
    /// Strings compared against search queries: heading values, the id and
    /// the split keywords.
    pub values: Vec<String>,
}

/// Build the global search index, restricted to `newest_version`.
#[must_use]
pub fn build_search_index(
    paths: &PathGenerator,
    markdown: &[MarkdownNode],
    newest_version: &str,
    preview: bool,
) -> Vec<SearchRecord> {
    markdown
        .iter()
        .filter_map(|node| {
            let source = node.file_absolute_path.as_str();
            let version =
                find_version(source, preview).unwrap_or_else(|| MASTER_VERSION.to_owned());
            if version != newest_version {
                return None;
            }

            let locale = find_locale(source);
            let keywords: Vec<String> = node
                .keywords
                .as_deref()
                .map(|k| k.split(',').map(str::to_owned).collect())
                .unwrap_or_default();
            if !keywords.is_empty() {
                tracing::debug!(source, ?keywords, "Indexing keywords");
            }

            let mut values: Vec<String> =
                node.headings.iter().map(|h| h.value.clone()).collect();
            if let Some(id) = node.file_id() {
                values.push(id.to_owned());
            }
            values.extend(keywords);

            Some(SearchRecord {
                id: node.id.clone(),
                keywords: node.keywords.clone(),
                file_lang: locale.map_or_else(String::new, |l| l.as_str().to_owned()),
                version,
                path: paths.page_path(
                    node.id.as_deref().unwrap_or_default(),
                    locale,
                    None,
                    is_blog(source),
                    false,
                    is_benchmark(source),
                ),
                values,
            })
        })
        .collect()
}

/// Search-index write failure.
#[derive(Debug, thiserror::Error)]
pub enum SearchIndexError {
    /// The index file could not be written.
    #[error("Failed to write search index {}: {source}", .path.display())]
    Io {
        /// Index artifact location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The records could not be serialized.
    #[error("Failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the search index as a single JSON document.
///
/// # Errors
///
/// Returns [`SearchIndexError`] on serialization or write failure; the
/// error is fatal to the generation run, with no retry.
pub fn write_search_index(path: &Path, records: &[SearchRecord]) -> Result<(), SearchIndexError> {
    let data = serde_json::to_string(records)?;
    fs::write(path, data).map_err(|source| SearchIndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "Search index saved");
    Ok(())
}
