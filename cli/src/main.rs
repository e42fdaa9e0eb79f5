mod cli;
mod sink;

use clap::Parser;
use std::io::Read;
use zenmarks::error::Result;
use zenmarks::export;
use zenmarks::snapshot::Snapshot;

fn read_snapshot_text(args: &cli::Cli) -> Result<String> {
    match &args.snapshot {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    env_logger::init();

    let snapshot = Snapshot::from_json(&read_snapshot_text(&args)?)?;
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    if args.dry_run {
        for file in export::plan_snapshot(&snapshot, date) {
            println!("{}", file.filename);
        }
        return Ok(());
    }

    let mut sink = sink::DirSink::new(args.output_dir.clone())?;
    let count = export::export_snapshot(&snapshot, date, &mut sink)?;
    eprintln!(
        "✓ Exported {} workspace(s) to {}",
        count,
        args.output_dir.display()
    );

    Ok(())
}
