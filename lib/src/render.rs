//! Emit one workspace bucket as a Netscape bookmark document.

use crate::aggregate::WorkspaceBucket;
use crate::models::LinkEntry;

/// Replace every `"` with `&quot;` so titles and URLs survive being placed
/// inside a quoted HREF attribute. Deliberately the only escaping performed;
/// `<`, `>` and `&` pass through verbatim, matching the original exporter.
fn escape_quotes(text: &str) -> String {
    text.replace('"', "&quot;")
}

/// One `<H3>` section with its inner link list. Empty sections still emit
/// the header and an empty `<DL>` block.
fn push_section(out: &mut String, heading: &str, entries: &[LinkEntry]) {
    out.push_str("  <DT><H3>");
    out.push_str(heading);
    out.push_str("</H3>\n");
    out.push_str("  <DL><p>\n");
    for entry in entries {
        out.push_str("    <DT><A HREF=\"");
        out.push_str(&escape_quotes(&entry.url));
        out.push_str("\">");
        out.push_str(&escape_quotes(&entry.title));
        out.push_str("</A>\n");
    }
    out.push_str("  </DL><p>\n");
}

/// Render a workspace's bucket as a complete bookmark document.
///
/// Section order is fixed: Essentials, Pinned Tabs, then every folder in
/// first-seen order. The two leading sections are omitted when empty;
/// folders are always emitted, even with zero entries. Byte-deterministic
/// for identical input.
pub fn render_workspace(workspace_id: &str, bucket: &WorkspaceBucket) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    out.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
    out.push_str(&format!(
        "<TITLE>Zen Browser Bookmarks – Workspace {}</TITLE>\n",
        workspace_id
    ));
    out.push_str(&format!(
        "<H1>Zen Browser Bookmarks – Workspace {}</H1>\n",
        workspace_id
    ));
    out.push_str("<DL><p>\n");

    if !bucket.essentials.is_empty() {
        push_section(&mut out, "Essentials", &bucket.essentials);
    }
    if !bucket.pinned_loose.is_empty() {
        push_section(&mut out, "Pinned Tabs", &bucket.pinned_loose);
    }
    for (name, entries) in bucket.folders() {
        push_section(&mut out, name, entries);
    }

    out.push_str("</DL><p>\n");
    out
}
