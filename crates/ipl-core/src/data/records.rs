// Normalized record types and the loaded table pair.

use crate::data::name::Name;
use crate::error::LoadError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Substitute for an absent `city` or `player_of_match`.
pub const UNKNOWN: &str = "Unknown";

/// Substitute for an absent `winner` (abandoned or no-result matches).
pub const NO_RESULT: &str = "No Result";

/// One row per match, after sentinel normalization.
///
/// `city`, `winner` and `player_of_match` are never absent once loaded;
/// `result` keeps its absence so distributions can exclude it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub id: u64,
    pub season: Name,
    pub city: Name,
    pub venue: Name,
    pub team1: Name,
    pub team2: Name,
    pub toss_winner: Name,
    pub winner: Name,
    pub result: Option<Name>,
    pub player_of_match: Name,
}

impl MatchRecord {
    /// True if `team` played in this match on either side.
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// True unless the match ended without a winner.
    pub fn has_result(&self) -> bool {
        self.winner != NO_RESULT
    }
}

/// One row per ball bowled, with the season joined in from its match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRecord {
    pub match_id: u64,
    pub batter: Name,
    pub bowler: Name,
    pub batsman_runs: u32,
    pub total_runs: u32,
    pub player_dismissed: Option<Name>,
    pub dismissal_kind: Option<Name>,
    /// `None` when `match_id` has no row in the match table.
    pub season: Option<Name>,
}

impl DeliveryRecord {
    pub fn is_wicket(&self) -> bool {
        self.player_dismissed.is_some()
    }
}

/// The loaded match and delivery tables.
///
/// Only produced by a successful load, so holding a `&Tables` means both
/// tables are present. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    matches: Vec<MatchRecord>,
    deliveries: Vec<DeliveryRecord>,
}

impl Tables {
    /// Left-join `deliveries` against `matches` on `match_id = id`, filling
    /// each delivery's `season`.
    ///
    /// Fails if two matches share an id, since the join must be many-to-one.
    pub fn join(
        matches: Vec<MatchRecord>,
        mut deliveries: Vec<DeliveryRecord>,
    ) -> Result<Self, LoadError> {
        let mut seasons: HashMap<u64, Name> = HashMap::with_capacity(matches.len());
        for m in &matches {
            if seasons.insert(m.id, m.season.clone()).is_some() {
                return Err(LoadError::Validation(format!(
                    "duplicate match id {} in match table",
                    m.id
                )));
            }
        }

        let mut unmatched = 0usize;
        for d in &mut deliveries {
            d.season = seasons.get(&d.match_id).cloned();
            if d.season.is_none() {
                unmatched += 1;
            }
        }

        if unmatched > 0 {
            warn!(
                "{} deliveries reference a match id missing from the match table; \
                 their season is left empty",
                unmatched
            );
        }
        debug!(
            "joined {} deliveries onto {} matches",
            deliveries.len(),
            matches.len()
        );

        Ok(Tables {
            matches,
            deliveries,
        })
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }
}
