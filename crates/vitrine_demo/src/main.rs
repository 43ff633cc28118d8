#![forbid(unsafe_code)]

//! # Vitrine Demo
//!
//! Drives the product showcase module end to end: sample page, module
//! mount, simulated clicks, rendered card, optional JSON state report.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p vitrine_demo -- --italic --clicks 2 --json
//! ```

use tracing_subscriber::EnvFilter;

use vitrine_demo::app;
use vitrine_demo::cli::Cli;
use vitrine_demo::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);

    // Logs go to stderr; stdout carries the rendered card and the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let (view, report) = app::run(&config)?;
    println!("{view}");

    if config.json {
        println!("{}", report.to_json()?);
    }
    if let Some(path) = &config.report_path {
        std::fs::write(path, report.to_json()?)?;
    }

    Ok(())
}
