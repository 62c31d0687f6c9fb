// Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ipl-dash")]
#[command(about = "IPL match and ball-by-ball analytics")]
pub struct Cli {
    /// Directory holding `config/` (and `defaults/` for first-run setup)
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Override the match CSV path from the config
    #[arg(long)]
    pub matches: Option<PathBuf>,

    /// Override the delivery CSV path from the config
    #[arg(long)]
    pub deliveries: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Headline numbers, matches per season, top winners, toss impact
    Home,
    /// One team's record; defaults to the first team alphabetically
    Team {
        team: Option<String>,
    },
    /// List the teams that can be passed to `team`
    Teams,
    /// Run, wicket and player-of-the-match leaderboards
    Players {
        /// Rows per leaderboard (must lie within the configured range)
        #[arg(long)]
        top: Option<usize>,
    },
    /// Busiest venues and cities
    Venues,
    /// Runs per season, result types, dismissal types
    Trends,
    /// Count distinct values of a match column
    Distinct {
        field: String,
    },
}
