//! Menu aggregation and page emission for the website generator.
//!
//! This crate provides:
//! - [`MenuSet`]/[`HomeSet`]: keyed navigation and landing-data lookups
//! - [`PageEmitter`]: computes routes and registers page builds with a
//!   [`PageSink`]
//! - [`build_search_index`]/[`write_search_index`]: the global search
//!   artifact
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use sitegen_content::ContentIndex;
//! use sitegen_pages::{EmitterConfig, PageEmitter, RecordingSink};
//!
//! let index = ContentIndex::load(Path::new("content-index.json"))?;
//! let emitter = PageEmitter::new(EmitterConfig {
//!     newest_version: "v2.0.0".to_owned(),
//!     ..Default::default()
//! });
//!
//! let mut sink = RecordingSink::new();
//! let summary = emitter.emit_all(&index, &mut sink)?;
//! assert_eq!(summary.total(), sink.pages().len());
//! # Ok(())
//! # }
//! ```

pub(crate) mod community;
pub(crate) mod context;
pub(crate) mod emitter;
pub(crate) mod menus;
pub(crate) mod search;
pub(crate) mod sink;

pub use community::{CommunityData, CommunityHome, CommunityMenu, community_data, community_home, community_menus};
pub use context::{ApiContext, CommunityContext, DocContext, PageContext};
pub use emitter::{EmitSummary, EmitterConfig, PageEmitter, Route, Template};
pub use menus::{ApiMenuEntry, HomeEntry, HomeSet, MenuEntry, MenuSet, api_menus};
pub use search::{SearchIndexError, SearchRecord, build_search_index, write_search_index};
pub use sink::{PageSink, RecordingSink, SinkError};

// Re-export the path generator for consumers that only format paths.
pub use sitegen_routes::PathGenerator;
