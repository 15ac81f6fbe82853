//! CLI error types.

use sitegen_config::ConfigError;
use sitegen_content::IndexError;
use sitegen_pages::{SearchIndexError, SinkError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Sink(#[from] SinkError),

    #[error("{0}")]
    SearchIndex(#[from] SearchIndexError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize page manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
