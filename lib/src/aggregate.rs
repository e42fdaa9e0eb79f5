//! Fold normalized records into per-workspace buckets.
//!
//! Workspace and folder emission order is user-visible (it decides the order
//! of generated files and sections), so both maps are backed by insertion-
//! ordered vectors rather than hash maps.

use crate::models::{FolderGroup, LinkEntry, TabRecord};
use crate::normalize::{normalize_group, normalize_tab};
use crate::snapshot::Snapshot;
use log::debug;

/// Everything exported for one workspace, grouped into the three sections of
/// the output document. Built in a single aggregation run and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceBucket {
    /// Tabs flagged always-visible across workspaces.
    pub essentials: Vec<LinkEntry>,
    /// Pinned tabs that belong to no folder.
    pub pinned_loose: Vec<LinkEntry>,
    folders: Vec<(String, Vec<LinkEntry>)>,
}

impl WorkspaceBucket {
    /// Folders in first-seen order, empty ones included.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &[LinkEntry])> {
        self.folders
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// List for `name`, created empty on first sight.
    fn folder_mut(&mut self, name: &str) -> &mut Vec<LinkEntry> {
        let pos = match self.folders.iter().position(|(n, _)| n == name) {
            Some(pos) => pos,
            None => {
                self.folders.push((name.to_string(), Vec::new()));
                self.folders.len() - 1
            }
        };
        &mut self.folders[pos].1
    }

    /// Total number of link entries across all three sections.
    pub fn link_count(&self) -> usize {
        self.essentials.len()
            + self.pinned_loose.len()
            + self.folders.iter().map(|(_, entries)| entries.len()).sum::<usize>()
    }
}

/// Insertion-ordered map of workspace id to bucket.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceMap {
    entries: Vec<(String, WorkspaceBucket)>,
}

impl WorkspaceMap {
    /// Workspaces in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkspaceBucket)> {
        self.entries
            .iter()
            .map(|(id, bucket)| (id.as_str(), bucket))
    }

    pub fn get(&self, workspace_id: &str) -> Option<&WorkspaceBucket> {
        self.entries
            .iter()
            .find(|(id, _)| id == workspace_id)
            .map(|(_, bucket)| bucket)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket for `workspace_id`, created empty on first reference.
    fn bucket_mut(&mut self, workspace_id: &str) -> &mut WorkspaceBucket {
        let pos = match self.entries.iter().position(|(id, _)| id == workspace_id) {
            Some(pos) => pos,
            None => {
                self.entries
                    .push((workspace_id.to_string(), WorkspaceBucket::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}

/// Partition normalized records into workspace buckets.
///
/// Two passes. Pass 1 classifies loose tabs: essential tabs go to
/// `essentials` (taking precedence over the pinned flag), pinned tabs
/// outside any folder go to `pinned_loose`, and everything else is left to
/// its folder group (or, for plain unpinned tabs, not exported at all).
/// Pass 2 installs each folder under its workspace, creating the entry even
/// for groups with zero qualifying members, and appends the members in
/// their original order.
///
/// No sorting anywhere: every sequence keeps pure append order.
pub fn aggregate<T, G>(tabs: T, groups: G) -> WorkspaceMap
where
    T: IntoIterator<Item = TabRecord>,
    G: IntoIterator<Item = FolderGroup>,
{
    let mut map = WorkspaceMap::default();

    for tab in tabs {
        let bucket = map.bucket_mut(&tab.workspace_id);
        if tab.is_essential {
            bucket.essentials.push(LinkEntry {
                title: tab.title,
                url: tab.url,
            });
        } else if tab.is_pinned && tab.containing_folder.is_none() {
            bucket.pinned_loose.push(LinkEntry {
                title: tab.title,
                url: tab.url,
            });
        } else {
            // Folder members arrive through their group in pass 2; plain
            // unpinned tabs are outside the scope of a pinned-tabs export.
            debug!("tab '{}' not classified in pass 1", tab.title);
        }
    }

    for group in groups {
        let bucket = map.bucket_mut(&group.workspace_id);
        bucket.folder_mut(&group.name).extend(group.members);
    }

    map
}

/// Normalize and aggregate a whole session snapshot.
pub fn aggregate_snapshot(snapshot: &Snapshot) -> WorkspaceMap {
    aggregate(
        snapshot.tabs.iter().filter_map(normalize_tab),
        snapshot.groups.iter().map(normalize_group),
    )
}
