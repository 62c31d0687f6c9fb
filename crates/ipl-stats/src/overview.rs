// League-wide headline numbers: seasons, match counts, winners, toss impact.

use crate::bucket::{by_season, distinct, top, value_counts, Bucket};
use crate::error::StatsError;
use crate::field::MatchField;
use ipl_core::config::Limits;
use ipl_core::Tables;
use serde::Serialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

pub fn total_matches(tables: &Tables) -> usize {
    tables.matches().len()
}

pub fn count_distinct_seasons(tables: &Tables) -> usize {
    count_distinct(tables, MatchField::Season)
}

/// Distinct values of `field` in the match table. Absent values are not
/// counted.
pub fn count_distinct(tables: &Tables, field: MatchField) -> usize {
    distinct(tables.matches().iter().filter_map(|m| field.value(m)))
}

/// Distinct values of the column named `field`.
///
/// Fails with `StatsError::InvalidParameter` for a name that is not a
/// categorical match column.
pub fn count_distinct_values(tables: &Tables, field: &str) -> Result<usize, StatsError> {
    let field: MatchField = field.parse()?;
    Ok(count_distinct(tables, field))
}

/// Number of matches per season, ascending by season.
pub fn matches_per_season(tables: &Tables) -> Vec<Bucket<u64>> {
    by_season(tables.matches().iter().map(|m| (&m.season, 1)))
}

/// Match winners by win count. "No Result" is ranked like any team.
pub fn top_winning_teams(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(value_counts(tables.matches().iter().map(|m| &m.winner)), n)
}

// ---------------------------------------------------------------------------
// Toss impact
// ---------------------------------------------------------------------------

/// Decided matches split by whether the toss winner also won the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TossImpact {
    pub toss_winner_won: u64,
    pub toss_winner_lost: u64,
}

impl TossImpact {
    pub fn decided(&self) -> u64 {
        self.toss_winner_won + self.toss_winner_lost
    }

    /// Percentage of decided matches won by the toss winner; 0 when none.
    pub fn won_pct(&self) -> f64 {
        let decided = self.decided();
        if decided == 0 {
            return 0.0;
        }
        self.toss_winner_won as f64 / decided as f64 * 100.0
    }
}

/// Matches without a result are dropped before partitioning.
pub fn toss_impact(tables: &Tables) -> TossImpact {
    tables
        .matches()
        .iter()
        .filter(|m| m.has_result())
        .fold(TossImpact::default(), |mut acc, m| {
            if m.toss_winner == m.winner {
                acc.toss_winner_won += 1;
            } else {
                acc.toss_winner_lost += 1;
            }
            acc
        })
}

// ---------------------------------------------------------------------------
// Home view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary {
    pub total_matches: usize,
    pub seasons: usize,
    /// Distinct `team1` values.
    pub teams: usize,
    pub venues: usize,
    pub matches_per_season: Vec<Bucket<u64>>,
    pub top_winning_teams: Vec<Bucket<u64>>,
    pub toss_impact: TossImpact,
}

pub fn home_summary(tables: &Tables, limits: &Limits) -> HomeSummary {
    let summary = HomeSummary {
        total_matches: total_matches(tables),
        seasons: count_distinct_seasons(tables),
        teams: count_distinct(tables, MatchField::Team1),
        venues: count_distinct(tables, MatchField::Venue),
        matches_per_season: matches_per_season(tables),
        top_winning_teams: top_winning_teams(tables, limits.top_winning_teams),
        toss_impact: toss_impact(tables),
    };
    debug!(
        "home summary: {} matches over {} seasons",
        summary.total_matches, summary.seasons
    );
    summary
}
