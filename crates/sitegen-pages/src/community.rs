//! Community content aggregation.
//!
//! Bundles the three inputs of the community section: article markdown
//! nodes, per-locale navigation menus and the landing-page data.

use serde::Serialize;

use sitegen_content::{
    CommunityStructure, FileNode, Locale, MarkdownNode, MenuItem, community_articles,
};

/// Marker identifying the community landing document.
const COMMUNITY_HOME_MARKER: &str = "communityHome";

/// Community navigation for one locale.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMenu {
    /// Menu locale.
    pub lang: Locale,
    /// Menu items in source order.
    pub menu_list: Vec<MenuItem>,
}

/// Community landing-page data for one locale.
#[derive(Clone, Debug, Serialize)]
pub struct CommunityHome {
    /// Landing-page locale.
    pub language: Locale,
    /// Full community structure, passed through verbatim.
    pub data: CommunityStructure,
    /// Source location of the landing document.
    pub path: String,
}

/// Community page inputs: articles, menus and landing data.
#[derive(Clone, Debug)]
pub struct CommunityData<'a> {
    /// Article markdown nodes, in index order.
    pub articles: Vec<&'a MarkdownNode>,
    /// Per-locale navigation menus.
    pub menus: Vec<CommunityMenu>,
    /// Per-locale landing data.
    pub home: Vec<CommunityHome>,
}

/// Collect community navigation menus from the structured file nodes.
#[must_use]
pub fn community_menus(files: &[FileNode]) -> Vec<CommunityMenu> {
    files
        .iter()
        .filter_map(|node| {
            let menu_list = node.community.as_ref()?.menu_list.as_ref()?;
            Some(CommunityMenu {
                lang: if node.absolute_path.contains("/en/") {
                    Locale::En
                } else {
                    Locale::Cn
                },
                menu_list: menu_list.clone(),
            })
        })
        .collect()
}

/// Collect community landing data from the structured file nodes.
#[must_use]
pub fn community_home(files: &[FileNode]) -> Vec<CommunityHome> {
    files
        .iter()
        .filter_map(|node| {
            let community = node.community.as_ref()?;
            if !node.absolute_path.contains(COMMUNITY_HOME_MARKER) {
                return None;
            }
            Some(CommunityHome {
                language: if node.absolute_path.contains("/en") {
                    Locale::En
                } else {
                    Locale::Cn
                },
                data: community.clone(),
                path: node.absolute_path.clone(),
            })
        })
        .collect()
}

/// Bundle articles, menus and landing data for community page emission.
#[must_use]
pub fn community_data<'a>(markdown: &'a [MarkdownNode], files: &[FileNode]) -> CommunityData<'a> {
    CommunityData {
        articles: community_articles(markdown),
        menus: community_menus(files),
        home: community_home(files),
    }
}
