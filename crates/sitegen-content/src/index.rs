//! Content-index document loading.
//!
//! The indexing layer queries four record families (markdown content,
//! API-reference records, structured JSON nodes) and hands the result over
//! as a single JSON document. Loading it is the only I/O in this crate;
//! failures are fatal to the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::node::{ApiReferenceNode, FileNode, MarkdownNode};

/// Content-index query result consumed by page generation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    /// Markdown content nodes (docs, blogs, benchmarks, community articles).
    #[serde(default)]
    pub markdown: Vec<MarkdownNode>,
    /// Flat API-reference records.
    #[serde(default)]
    pub api_files: Vec<ApiReferenceNode>,
    /// Structured JSON nodes (menus, doc home, community data).
    #[serde(default)]
    pub files: Vec<FileNode>,
}

impl ContentIndex {
    /// Load a content-index document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Io`] if the file cannot be read and
    /// [`IndexError::Parse`] if the document is malformed.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let data = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Parse a content-index document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Parse`] if the document is malformed.
    pub fn from_json(data: &str) -> Result<Self, IndexError> {
        serde_json::from_str(data).map_err(IndexError::Parse)
    }
}

/// Error loading the content index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The index document could not be read.
    #[error("Failed to read content index {}: {source}", .path.display())]
    Io {
        /// Index document location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The index document is not valid JSON or misses required fields.
    #[error("Invalid content index: {0}")]
    Parse(#[from] serde_json::Error),
}
