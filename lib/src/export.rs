//! Pair rendered documents with date-stamped file names and drive the sink.

use crate::aggregate::{aggregate_snapshot, WorkspaceMap};
use crate::error::Result;
use crate::render::render_workspace;
use crate::snapshot::Snapshot;
use chrono::NaiveDate;
use log::{debug, info};

/// One bookmark file, ready for the host to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

/// Destination for exported files: a directory on disk, a capture buffer in
/// tests, a browser download shim. The core never performs I/O itself.
pub trait BookmarkSink {
    fn save(&mut self, file: &ExportFile) -> Result<()>;
}

/// Date-stamped file name for one workspace:
/// `zen-bookmarks-<id>-<YYYYMMDD>.html`.
///
/// Brace stripping here is idempotent with the normalizer's, so an already
/// canonical id passes through unchanged.
pub fn filename_for(workspace_id: &str, date: NaiveDate) -> String {
    let id: String = workspace_id
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect();
    format!("zen-bookmarks-{}-{}.html", id, date.format("%Y%m%d"))
}

/// Render every workspace and pair it with its file name, in workspace
/// iteration order. Pure; performs no I/O.
pub fn plan_exports(workspaces: &WorkspaceMap, date: NaiveDate) -> Vec<ExportFile> {
    workspaces
        .iter()
        .map(|(id, bucket)| ExportFile {
            filename: filename_for(id, date),
            content: render_workspace(id, bucket),
        })
        .collect()
}

/// Plan the full export for a raw session snapshot.
pub fn plan_snapshot(snapshot: &Snapshot, date: NaiveDate) -> Vec<ExportFile> {
    plan_exports(&aggregate_snapshot(snapshot), date)
}

/// Hand every planned file to the sink; returns the number of workspaces
/// processed. A sink failure propagates unchanged and stops the run.
pub fn export_all(
    workspaces: &WorkspaceMap,
    date: NaiveDate,
    sink: &mut dyn BookmarkSink,
) -> Result<usize> {
    let files = plan_exports(workspaces, date);
    for file in &files {
        debug!("saving {} ({} bytes)", file.filename, file.content.len());
        sink.save(file)?;
    }
    info!("exported {} workspace(s)", files.len());
    Ok(files.len())
}

/// One-shot pipeline: normalize, aggregate, render, save.
pub fn export_snapshot(
    snapshot: &Snapshot,
    date: NaiveDate,
    sink: &mut dyn BookmarkSink,
) -> Result<usize> {
    export_all(&aggregate_snapshot(snapshot), date, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Records save calls instead of touching the filesystem.
    #[derive(Default)]
    struct CaptureSink {
        saved: Vec<ExportFile>,
    }

    impl BookmarkSink for CaptureSink {
        fn save(&mut self, file: &ExportFile) -> Result<()> {
            self.saved.push(file.clone());
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("abc", 2026, 8, 30, "zen-bookmarks-abc-20260830.html")]
    #[case("{abc}", 2026, 8, 30, "zen-bookmarks-abc-20260830.html")]
    #[case("default", 2026, 1, 5, "zen-bookmarks-default-20260105.html")]
    fn test_filename_grammar(
        #[case] id: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(filename_for(id, date(y, m, d)), expected);
    }

    #[test]
    fn test_workspace_scenario_end_to_end() {
        let snapshot = Snapshot::from_json(
            r#"{
                "tabs": [
                    {"workspace-id": "{abc}", "essential": true, "label": "Mail", "url": "https://mail.example"},
                    {"workspace-id": "{abc}", "pinned": true, "label": "News", "url": "https://news.example"}
                ],
                "groups": [
                    {"workspace-id": "{abc}", "label": "Dev", "id": "g1", "items": [
                        {"kind": "tab", "label": "Docs", "url": "https://docs.example"}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let mut sink = CaptureSink::default();
        let count = export_snapshot(&snapshot, date(2026, 8, 30), &mut sink).unwrap();
        assert_eq!(count, 1);
        assert_eq!(sink.saved.len(), 1);

        let file = &sink.saved[0];
        assert_eq!(file.filename, "zen-bookmarks-abc-20260830.html");
        assert!(file.content.contains("<DT><H3>Essentials</H3>"));
        assert!(file.content.contains("<DT><H3>Pinned Tabs</H3>"));
        assert!(file.content.contains("<DT><H3>Dev</H3>"));
        assert_eq!(file.content.matches("<A HREF=").count(), 3);
        assert!(file.content.contains("<A HREF=\"https://docs.example\">Docs</A>"));
    }

    #[test]
    fn test_blank_url_tab_produces_no_files() {
        let snapshot = Snapshot::from_json(r#"{"tabs": [{"url": "about:blank"}]}"#).unwrap();
        let mut sink = CaptureSink::default();
        let count = export_snapshot(&snapshot, date(2026, 8, 30), &mut sink).unwrap();
        assert_eq!(count, 0);
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_files_follow_workspace_order() {
        let snapshot = Snapshot::from_json(
            r#"{"tabs": [
                {"workspace-id": "beta", "pinned": true, "url": "https://b.example"},
                {"workspace-id": "alpha", "pinned": true, "url": "https://a.example"}
            ]}"#,
        )
        .unwrap();
        let files = plan_snapshot(&snapshot, date(2026, 8, 30));
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            [
                "zen-bookmarks-beta-20260830.html",
                "zen-bookmarks-alpha-20260830.html"
            ]
        );
    }

    #[test]
    fn test_sink_error_stops_the_run() {
        struct FailingSink;
        impl BookmarkSink for FailingSink {
            fn save(&mut self, _file: &ExportFile) -> Result<()> {
                Err("disk full".into())
            }
        }

        let snapshot = Snapshot::from_json(
            r#"{"tabs": [{"workspace-id": "ws", "pinned": true, "url": "https://a.example"}]}"#,
        )
        .unwrap();
        let result = export_snapshot(&snapshot, date(2026, 8, 30), &mut FailingSink);
        assert!(result.is_err());
    }

    #[test]
    fn test_planning_twice_is_byte_identical() {
        let snapshot = Snapshot::from_json(
            r#"{"tabs": [{"workspace-id": "ws", "essential": true, "label": "A \"quoted\" title", "url": "https://a.example"}]}"#,
        )
        .unwrap();
        let first = plan_snapshot(&snapshot, date(2026, 8, 30));
        let second = plan_snapshot(&snapshot, date(2026, 8, 30));
        assert_eq!(first, second);
        assert!(first[0].content.contains("A &quot;quoted&quot; title"));
    }
}
