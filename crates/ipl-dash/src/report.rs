// Maps a requested view onto the aggregation calls that feed it.

use crate::cli::Command;
use anyhow::Context;
use ipl_core::config::Limits;
use ipl_core::{Name, Tables};
use ipl_stats::overview::{self, HomeSummary};
use ipl_stats::player::{self, PlayerReport};
use ipl_stats::team::{self, TeamReport};
use ipl_stats::trends::{self, TrendsReport};
use ipl_stats::venue::{self, VenueReport};
use serde::Serialize;

/// One rendered view. Serialized with a `view` tag for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Report {
    Home(HomeSummary),
    Team(TeamReport),
    Teams { teams: Vec<Name> },
    Players(PlayerReport),
    Venues(VenueReport),
    Trends(TrendsReport),
    Distinct { field: String, count: usize },
}

pub fn build(tables: &Tables, command: &Command, limits: &Limits) -> anyhow::Result<Report> {
    let report = match command {
        Command::Home => Report::Home(overview::home_summary(tables, limits)),
        Command::Team { team } => {
            let team = match team {
                Some(name) => Name::new(name.trim()),
                None => team::team_names(tables)
                    .into_iter()
                    .next()
                    .context("no teams in match data")?,
            };
            Report::Team(team::team_report(tables, &team, limits))
        }
        Command::Teams => Report::Teams {
            teams: team::team_names(tables),
        },
        Command::Players { top } => {
            let n = limits.check_players(top.unwrap_or(limits.top_players))?;
            Report::Players(player::player_report(tables, n))
        }
        Command::Venues => Report::Venues(venue::venue_report(tables, limits)),
        Command::Trends => Report::Trends(trends::trends_report(tables, limits)),
        Command::Distinct { field } => Report::Distinct {
            field: field.clone(),
            count: overview::count_distinct_values(tables, field)?,
        },
    };
    Ok(report)
}
