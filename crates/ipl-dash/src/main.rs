// Dashboard entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Initialize tracing (stderr, or a file with --log-file)
// 3. Load config, load data once, print the requested view

use ipl_dash::cli::Cli;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;
    info!("IPL dashboard starting up");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = ipl_dash::run(&cli, &mut out) {
        error!("{:#}", e);
        return Err(e);
    }

    info!("Done");
    Ok(())
}

/// Initialize tracing. Logs go to stderr so stdout carries only the report,
/// or to `--log-file` when given.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ipl_dash=info,ipl_core=info,warn"));

    match &cli.log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to set tracing subscriber")?;
        }
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to set tracing subscriber")?;
        }
    }

    Ok(())
}
