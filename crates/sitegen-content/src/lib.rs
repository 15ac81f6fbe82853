//! Content-node model and classification for the website generator.
//!
//! This crate provides:
//! - [`ContentIndex`]: the content-index document supplied by the indexing layer
//! - [`classify`]: pure locale/version/category derivation from source paths
//! - [`filters`]: order-preserving partitions of the markdown node list
//!
//! Classification never fails on malformed input: a missed pattern degrades
//! to `None` and callers substitute the configured defaults.

pub mod classify;
pub mod filters;
pub(crate) mod index;
pub(crate) mod node;

pub use classify::{Locale, PREVIEW_VERSION, find_locale, find_version, is_benchmark, is_blog};
pub use filters::{community_articles, docs_with_version};
pub use index::{ContentIndex, IndexError};
pub use node::{
    ApiReferenceNode, CommunityStructure, FileNode, Heading, MarkdownNode, MenuItem, MenuStructure,
};
