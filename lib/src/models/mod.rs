pub mod tab;

pub use tab::{FolderGroup, LinkEntry, TabRecord};
