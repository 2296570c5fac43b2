use anyhow::Result;
use clap::Parser;

use power_law_metrics::{Cli, data::write_json, run};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build and print the report
    let report = run(&args)?;
    write_json(&report, std::io::stdout().lock(), args.pretty)
}
