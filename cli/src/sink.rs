use std::fs;
use std::path::PathBuf;
use zenmarks::error::Result;
use zenmarks::export::{BookmarkSink, ExportFile};

/// Sink writing each exported bookmark file into a target directory.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Create the sink, making the directory (and parents) if needed.
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl BookmarkSink for DirSink {
    fn save(&mut self, file: &ExportFile) -> Result<()> {
        fs::write(self.dir.join(&file.filename), &file.content)?;
        Ok(())
    }
}
