/// One exportable browsable entry, after normalization.
///
/// Produced by `normalize::normalize_tab`; the workspace id has its brace
/// wrapping stripped and the URL is guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    pub workspace_id: String,
    pub title: String,
    pub url: String,
    pub is_essential: bool,
    pub is_pinned: bool,
    /// Name of the folder group the tab visually sits in, or `None` if loose.
    pub containing_folder: Option<String>,
}

/// A single link line in a bookmark document: visible text plus target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
}

/// A named, ordered collection of links sharing a workspace.
///
/// Members are already normalized: non-tab items and blank-URL tabs from the
/// source group never make it into `members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    pub workspace_id: String,
    pub name: String,
    pub members: Vec<LinkEntry>,
}
