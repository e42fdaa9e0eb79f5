//! Serialized dump of the host browser's live tab/group state.
//!
//! The export engine never talks to a browser directly; an adapter on the
//! host side enumerates tabs and tab groups and serializes them into this
//! shape. Every field a host may omit is optional here, so a partial or
//! malformed record degrades to a skipped entry instead of a parse failure.

use crate::error::Result;
use serde::Deserialize;

/// Raw tab-like object as enumerated by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawTab {
    /// Opaque workspace identifier, possibly brace-wrapped (`{abc}`).
    pub workspace_id: Option<String>,
    /// Tab is flagged always-visible across workspaces.
    pub essential: bool,
    /// Tab carries the host's pinned attribute.
    pub pinned: bool,
    /// Explicit user-visible label, if set.
    pub label: Option<String>,
    /// Live page title.
    pub title: Option<String>,
    /// Live resolved URL.
    pub url: Option<String>,
    /// Override URL recorded before navigation; checked before `url`.
    pub original_url: Option<String>,
    /// Name of the folder group the tab visually belongs to.
    pub container: Option<String>,
}

/// One member of a tab group. Hosts put things other than tabs inside
/// groups (splitters, sub-group headers); anything that is not a tab is
/// carried as `Other` and ignored by the exporter.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GroupItem {
    Tab(RawTab),
    #[serde(other)]
    Other,
}

/// Raw group-like object (a named folder of tabs).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawGroup {
    pub workspace_id: Option<String>,
    /// User-visible label; missing or empty falls back to `id`.
    pub label: Option<String>,
    /// Stable host-assigned identifier.
    pub id: String,
    /// Members in the host's visual order.
    pub items: Vec<GroupItem>,
}

impl RawGroup {
    /// Folder display name: explicit label, else the stable identifier.
    pub fn display_name(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }
}

/// A complete session dump: every tab and every tab group the host could see.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub tabs: Vec<RawTab>,
    pub groups: Vec<RawGroup>,
}

impl Snapshot {
    /// Parse a snapshot from its JSON serialization.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
