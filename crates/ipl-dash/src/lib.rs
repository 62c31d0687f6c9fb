// Command-line front end: loads configuration and data once, then prints one
// dashboard view. All numbers come from `ipl_stats`; this crate only selects
// and formats them.

pub mod cli;
pub mod render;
pub mod report;

use anyhow::Context;
use cli::{Cli, OutputFormat};
use ipl_core::config::{self, Config};
use ipl_core::DataStore;
use std::io::Write;
use tracing::info;

/// Apply command-line path overrides on top of the loaded config.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = config::load_config(&cli.base_dir).context("failed to load configuration")?;
    if let Some(matches) = &cli.matches {
        config.data.matches = matches.display().to_string();
    }
    if let Some(deliveries) = &cli.deliveries {
        config.data.deliveries = deliveries.display().to_string();
    }
    Ok(config)
}

/// Resolve config, load the tables, build the requested view and write it.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    info!(
        "Config loaded: matches={}, deliveries={}",
        config.data.matches, config.data.deliveries
    );

    let store = DataStore::new(config.data.clone());
    let tables = store.tables().context("data unavailable")?;

    let report = report::build(tables, &cli.command, &config.limits)?;
    match cli.format {
        OutputFormat::Text => render::write_text(&report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to encode report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
