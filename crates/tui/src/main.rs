mod app;
mod renderer;
mod sample;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let (items, skipped) = if let Some(arg) = args.get(1) {
        if arg == "-h" || arg == "--help" {
            eprintln!("Usage: trackline [items.json]");
            eprintln!("Renders the built-in sample timeline when no file is given.");
            return Ok(());
        }
        let path = PathBuf::from(arg);
        let data = std::fs::read(&path)?;
        let outcome = trackline_core::items::parse_items(&data)?;
        (outcome.items, outcome.skipped)
    } else {
        (sample::items(), 0)
    };

    app::run(items, skipped)
}
