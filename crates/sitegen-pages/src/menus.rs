//! Navigation menu and doc-home aggregation.
//!
//! Builds the lookup structures consumed by page templates: per
//! locale/version navigation menus, doc-home landing data and the flat
//! API-reference menu list. Menu and home entries are kept in insertion
//! order with an explicit keyed index; colliding keys keep the first entry
//! seen and later duplicates are logged and ignored.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use sitegen_content::{ApiReferenceNode, FileNode, Locale, MenuItem, find_version, is_blog};
use sitegen_routes::{MASTER_VERSION, api_reference_path};

/// Locale test used during aggregation.
///
/// Structured JSON nodes always live under a locale folder, so a coarse
/// binary test is enough: anything not under `/en/` is Chinese.
fn file_locale(path: &str, marker: &str) -> Locale {
    if path.contains(marker) {
        Locale::En
    } else {
        Locale::Cn
    }
}

/// Lookup key for a menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MenuKey {
    locale: Locale,
    version: String,
    is_blog: bool,
}

/// Navigation menu for one locale/version pair.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Menu locale.
    pub lang: Locale,
    /// Doc version the menu describes; `master` when unversioned.
    pub version: String,
    /// Whether this is the blog navigation.
    pub is_blog: bool,
    /// Menu items in source order.
    pub menu_list: Vec<MenuItem>,
    /// Source location of the menu document.
    pub absolute_path: String,
}

/// All navigation menus, insertion-ordered with a keyed index.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct MenuSet {
    entries: Vec<MenuEntry>,
    #[serde(skip)]
    index: HashMap<MenuKey, usize>,
}

impl MenuSet {
    /// Aggregate menu entries from the structured file nodes.
    #[must_use]
    pub fn from_files(files: &[FileNode], preview: bool) -> Self {
        let mut set = Self::default();
        for node in files {
            let Some(menu) = &node.menu else { continue };
            set.insert(MenuEntry {
                lang: file_locale(&node.absolute_path, "/en/"),
                version: find_version(&node.absolute_path, preview)
                    .unwrap_or_else(|| MASTER_VERSION.to_owned()),
                is_blog: is_blog(&node.absolute_path),
                menu_list: menu.menu_list.clone(),
                absolute_path: node.absolute_path.clone(),
            });
        }
        set
    }

    fn insert(&mut self, entry: MenuEntry) {
        let key = MenuKey {
            locale: entry.lang,
            version: entry.version.clone(),
            is_blog: entry.is_blog,
        };
        match self.index.entry(key) {
            Entry::Occupied(_) => {
                tracing::warn!(
                    path = %entry.absolute_path,
                    version = %entry.version,
                    locale = %entry.lang,
                    "Duplicate menu entry ignored"
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up the menu for a locale/version pair.
    #[must_use]
    pub fn get(&self, locale: Locale, version: &str, is_blog: bool) -> Option<&MenuEntry> {
        let key = MenuKey {
            locale,
            version: version.to_owned(),
            is_blog,
        };
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of distinct menus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no menus were aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Doc-home landing data for one locale/version pair.
#[derive(Clone, Debug, Serialize)]
pub struct HomeEntry {
    /// Landing-page locale.
    pub language: Locale,
    /// Landing-page data, passed through verbatim.
    pub data: serde_json::Value,
    /// Doc version the landing page belongs to; `master` when unversioned.
    pub version: String,
    /// Source location of the landing document.
    pub path: String,
}

/// All doc-home entries, insertion-ordered with a keyed index.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct HomeSet {
    entries: Vec<HomeEntry>,
    #[serde(skip)]
    index: HashMap<(Locale, String), usize>,
}

impl HomeSet {
    /// Aggregate doc-home entries from the structured file nodes.
    #[must_use]
    pub fn from_files(files: &[FileNode], preview: bool) -> Self {
        let mut set = Self::default();
        for node in files {
            let Some(data) = &node.doc_home else { continue };
            let entry = HomeEntry {
                language: file_locale(&node.absolute_path, "/en"),
                data: data.clone(),
                version: find_version(&node.absolute_path, preview)
                    .unwrap_or_else(|| MASTER_VERSION.to_owned()),
                path: node.absolute_path.clone(),
            };
            match set.index.entry((entry.language, entry.version.clone())) {
                Entry::Occupied(_) => {
                    tracing::warn!(path = %entry.path, "Duplicate doc-home entry ignored");
                }
                Entry::Vacant(slot) => {
                    slot.insert(set.entries.len());
                    set.entries.push(entry);
                }
            }
        }
        set
    }

    /// Look up the landing data for a locale/version pair.
    #[must_use]
    pub fn get(&self, locale: Locale, version: &str) -> Option<&HomeEntry> {
        self.index
            .get(&(locale, version.to_owned()))
            .map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[HomeEntry] {
        &self.entries
    }
}

/// Menu entry for one API-reference record.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMenuEntry {
    /// Reference entry name.
    pub id: String,
    /// Reference category.
    pub title: String,
    /// API menus are locale-invariant.
    pub lang: Option<Locale>,
    /// Fixed grouping label for the reference section.
    pub label1: String,
    /// Unused grouping label.
    pub label2: String,
    /// Unused grouping label.
    pub label3: String,
    /// Sort weight.
    pub order: i64,
    /// Grouping flag, unset for reference entries.
    pub is_menu: Option<bool>,
    /// External link target, unset for reference entries.
    pub out_link: Option<String>,
    /// Marks the entry as belonging to the API reference tree.
    pub is_api_reference: bool,
    /// Public path of the reference page.
    pub url: String,
    /// Reference category.
    pub category: String,
    /// API release of the record.
    pub api_version: String,
    /// Matching doc version; may be empty.
    pub doc_version: String,
}

/// Flat API menu list, one entry per record in input order.
///
/// No deduplication: duplicate (category, version, name) tuples produce
/// duplicate entries, which upstream owns avoiding.
#[must_use]
pub fn api_menus(nodes: &[ApiReferenceNode]) -> Vec<ApiMenuEntry> {
    nodes
        .iter()
        .map(|node| ApiMenuEntry {
            id: node.name.clone(),
            title: node.category.clone(),
            lang: None,
            label1: "api_reference".to_owned(),
            label2: String::new(),
            label3: String::new(),
            order: 0,
            is_menu: None,
            out_link: None,
            is_api_reference: true,
            url: api_reference_path(&node.category, &node.version, &node.name),
            category: node.category.clone(),
            api_version: node.version.clone(),
            doc_version: node.doc_version.clone(),
        })
        .collect()
}
