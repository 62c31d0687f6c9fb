// Named categorical columns of the match table.

use crate::error::StatsError;
use ipl_core::{MatchRecord, Name};
use std::fmt;
use std::str::FromStr;

/// A categorical column of the match table that can be counted by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    Season,
    City,
    Venue,
    Team1,
    Team2,
    TossWinner,
    Winner,
    Result,
    PlayerOfMatch,
}

impl MatchField {
    pub const ALL: [MatchField; 9] = [
        MatchField::Season,
        MatchField::City,
        MatchField::Venue,
        MatchField::Team1,
        MatchField::Team2,
        MatchField::TossWinner,
        MatchField::Winner,
        MatchField::Result,
        MatchField::PlayerOfMatch,
    ];

    /// Column name as it appears in the CSV header.
    pub fn column(&self) -> &'static str {
        match self {
            MatchField::Season => "season",
            MatchField::City => "city",
            MatchField::Venue => "venue",
            MatchField::Team1 => "team1",
            MatchField::Team2 => "team2",
            MatchField::TossWinner => "toss_winner",
            MatchField::Winner => "winner",
            MatchField::Result => "result",
            MatchField::PlayerOfMatch => "player_of_match",
        }
    }

    /// The field's value on `record`; `None` only for an absent `result`.
    pub fn value<'a>(&self, record: &'a MatchRecord) -> Option<&'a Name> {
        match self {
            MatchField::Season => Some(&record.season),
            MatchField::City => Some(&record.city),
            MatchField::Venue => Some(&record.venue),
            MatchField::Team1 => Some(&record.team1),
            MatchField::Team2 => Some(&record.team2),
            MatchField::TossWinner => Some(&record.toss_winner),
            MatchField::Winner => Some(&record.winner),
            MatchField::Result => record.result.as_ref(),
            MatchField::PlayerOfMatch => Some(&record.player_of_match),
        }
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for MatchField {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MatchField::ALL
            .into_iter()
            .find(|f| f.column() == wanted)
            .ok_or_else(|| StatsError::InvalidParameter {
                name: "field",
                message: format!(
                    "unknown match column '{wanted}'; expected one of: {}",
                    MatchField::ALL
                        .iter()
                        .map(|f| f.column())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}
