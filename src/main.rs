use anyhow::{Context, Result};
use clap::Parser;

use grid_sheet::cli::Args;
use grid_sheet::config::RunConfig;
use grid_sheet::run::run;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let config = RunConfig::from_args(&args).with_context(|| "Invalid layout settings")?;

    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(e) if e.is_setup_required() => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "Placed {} images on {} pages",
        summary.images,
        summary.stats.pages
    );
    println!("PDF created: {}", summary.output.display());

    Ok(())
}
