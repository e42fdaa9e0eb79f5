pub mod aggregate;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod render;
pub mod snapshot;

// Re-export the pipeline surface for convenience
pub use error::ZenmarksError;
pub use export::{export_snapshot, plan_snapshot, BookmarkSink, ExportFile};
pub use snapshot::Snapshot;
