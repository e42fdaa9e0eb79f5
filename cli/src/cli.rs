use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Export Zen Browser pinned tabs and folders to Netscape bookmark files,
/// one file per workspace.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Session snapshot JSON file ("-" or omitted reads stdin)
    #[arg(name = "SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Directory the bookmark files are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the planned file names without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Override the export date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}
