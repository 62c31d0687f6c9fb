// Per-team records: matches, wins, win rate, seasonal and venue breakdowns.

use crate::bucket::{by_season, top, value_counts, Bucket};
use ipl_core::config::Limits;
use ipl_core::{MatchRecord, Name, Tables};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Distinct `team1` values in ascending order, for a team picker.
pub fn team_names(tables: &Tables) -> Vec<Name> {
    tables
        .matches()
        .iter()
        .map(|m| &m.team1)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Matches in which `team` appeared as either side. Empty for an unknown team.
pub fn team_matches<'a>(tables: &'a Tables, team: &str) -> Vec<&'a MatchRecord> {
    tables.matches().iter().filter(|m| m.involves(team)).collect()
}

/// Matches won by `team`.
pub fn team_wins<'a>(tables: &'a Tables, team: &str) -> Vec<&'a MatchRecord> {
    tables.matches().iter().filter(|m| m.winner == team).collect()
}

/// Win percentage in `0.0..=100.0`; 0 for a team with no matches.
pub fn win_rate(tables: &Tables, team: &str) -> f64 {
    percentage(team_wins(tables, team).len(), team_matches(tables, team).len())
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Wins per season, ascending by season. Seasons without a win are omitted.
pub fn season_wise_wins(tables: &Tables, team: &str) -> Vec<Bucket<u64>> {
    by_season(team_wins(tables, team).into_iter().map(|m| (&m.season, 1)))
}

/// Venues ranked by the number of `team`'s wins there.
pub fn top_venues_for_team(tables: &Tables, team: &str, n: usize) -> Vec<Bucket<u64>> {
    top(
        value_counts(team_wins(tables, team).into_iter().map(|m| &m.venue)),
        n,
    )
}

// ---------------------------------------------------------------------------
// Team view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamSummary {
    pub matches: usize,
    pub wins: usize,
    /// Every non-win, including no-result matches.
    pub losses: usize,
    pub win_rate: f64,
}

pub fn team_summary(tables: &Tables, team: &str) -> TeamSummary {
    let matches = team_matches(tables, team).len();
    let wins = team_wins(tables, team).len();
    TeamSummary {
        matches,
        wins,
        losses: matches.saturating_sub(wins),
        win_rate: percentage(wins, matches),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReport {
    pub team: Name,
    pub summary: TeamSummary,
    pub season_wins: Vec<Bucket<u64>>,
    pub top_venues: Vec<Bucket<u64>>,
}

pub fn team_report(tables: &Tables, team: &str, limits: &Limits) -> TeamReport {
    let summary = team_summary(tables, team);
    debug!(
        "team report for {}: {} matches, {} wins",
        team, summary.matches, summary.wins
    );
    TeamReport {
        team: Name::new(team),
        summary,
        season_wins: season_wise_wins(tables, team),
        top_venues: top_venues_for_team(tables, team, limits.top_team_venues),
    }
}
