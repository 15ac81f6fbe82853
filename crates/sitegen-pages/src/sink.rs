//! Site-builder boundary.
//!
//! The emitter never writes pages itself; it registers one page-build
//! request per route with an injected [`PageSink`]. A registration
//! failure aborts the whole generation run, with no retry.

use serde_json::Value;

use crate::emitter::Route;

/// Registration failure reported by a [`PageSink`].
#[derive(Debug, thiserror::Error)]
#[error("Failed to register page {path}: {message}")]
pub struct SinkError {
    /// Route path whose registration failed.
    pub path: String,
    /// Builder-reported failure description.
    pub message: String,
}

impl SinkError {
    /// Create a registration failure for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// External site-builder boundary: accepts one page-build request per
/// computed route.
pub trait PageSink {
    /// Register a page build for `route`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the builder rejects the registration;
    /// the error is fatal to the generation run.
    fn register_page(&mut self, route: &Route<'_>) -> Result<(), SinkError>;
}

/// Collects registered pages as JSON values, in registration order.
///
/// Backs the CLI's build manifest and the in-memory sink used by tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pages: Vec<Value>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered pages in registration order.
    #[must_use]
    pub fn pages(&self) -> &[Value] {
        &self.pages
    }

    /// Consume the sink, yielding the registered pages.
    #[must_use]
    pub fn into_pages(self) -> Vec<Value> {
        self.pages
    }
}

impl PageSink for RecordingSink {
    fn register_page(&mut self, route: &Route<'_>) -> Result<(), SinkError> {
        let value = serde_json::to_value(route)
            .map_err(|e| SinkError::new(route.path.clone(), e.to_string()))?;
        self.pages.push(value);
        Ok(())
    }
}
