//! Turn raw host objects into canonical records.
//!
//! Pure functions: a tab that cannot be exported (no URL, or the blank
//! placeholder page) maps to `None` rather than an error, so one bad record
//! never aborts an export run.

use crate::models::{FolderGroup, LinkEntry, TabRecord};
use crate::snapshot::{GroupItem, RawGroup, RawTab};

/// URL of the host's empty placeholder page; such tabs are never exported.
const BLANK_URL: &str = "about:blank";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Canonical workspace id: brace characters stripped, empty maps to "default".
pub fn normalize_workspace_id(raw: Option<&str>) -> String {
    let stripped: String = raw
        .unwrap_or("")
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect();
    if stripped.is_empty() {
        "default".to_string()
    } else {
        stripped
    }
}

/// Export URL for a tab: the pre-navigation override wins over the live URL.
fn resolve_url(tab: &RawTab) -> Option<&str> {
    non_empty(tab.original_url.as_deref())
        .or_else(|| non_empty(tab.url.as_deref()))
        .filter(|url| *url != BLANK_URL)
}

/// Normalize one raw tab, or `None` if it has no exportable URL.
///
/// Title resolution order: explicit label, live page title, then the URL
/// itself, so the record always carries a non-empty title.
pub fn normalize_tab(tab: &RawTab) -> Option<TabRecord> {
    let url = resolve_url(tab)?.to_string();
    let title = non_empty(tab.label.as_deref())
        .or_else(|| non_empty(tab.title.as_deref()))
        .unwrap_or(&url)
        .to_string();

    Some(TabRecord {
        workspace_id: normalize_workspace_id(tab.workspace_id.as_deref()),
        title,
        url,
        is_essential: tab.essential,
        is_pinned: tab.pinned,
        containing_folder: non_empty(tab.container.as_deref()).map(str::to_string),
    })
}

/// Normalize one raw group into a folder of link entries.
///
/// Non-tab members are skipped silently; tab members pass through the same
/// blank-URL filter as loose tabs, in their original order.
pub fn normalize_group(group: &RawGroup) -> FolderGroup {
    let members = group
        .items
        .iter()
        .filter_map(|item| match item {
            GroupItem::Tab(tab) => normalize_tab(tab).map(|rec| LinkEntry {
                title: rec.title,
                url: rec.url,
            }),
            GroupItem::Other => None,
        })
        .collect();

    FolderGroup {
        workspace_id: normalize_workspace_id(group.workspace_id.as_deref()),
        name: group.display_name().to_string(),
        members,
    }
}
