// CSV loading and normalization for the match and delivery tables.
//
// Missing categorical values in the match table are filled with sentinel
// labels exactly once, here. Everything downstream sees either a concrete
// `Name` or an explicit `None`.

use crate::config::DataPaths;
use crate::data::name::{Interner, Name};
use crate::data::records::{DeliveryRecord, MatchRecord, Tables, NO_RESULT, UNKNOWN};
use crate::error::LoadError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns the match CSV must provide. Others are ignored.
pub const MATCH_COLUMNS: &[&str] = &[
    "id",
    "season",
    "city",
    "venue",
    "team1",
    "team2",
    "toss_winner",
    "winner",
    "result",
    "player_of_match",
];

/// Columns the delivery CSV must provide. Others are ignored.
pub const DELIVERY_COLUMNS: &[&str] = &[
    "match_id",
    "batter",
    "bowler",
    "batsman_runs",
    "total_runs",
    "player_dismissed",
    "dismissal_kind",
];

/// Cell contents treated as "no value".
const NA_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Placeholder path for errors raised by the reader-based loaders; the
/// path-based wrappers replace it with the real file name.
const READER: &str = "<reader>";

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Every field is read as text so absence markers and integral floats can be
/// handled uniformly before typing.
#[derive(Debug, Deserialize)]
struct RawMatch {
    id: String,
    season: String,
    city: String,
    venue: String,
    team1: String,
    team2: String,
    toss_winner: String,
    winner: String,
    result: String,
    player_of_match: String,
}

#[derive(Debug, Deserialize)]
struct RawDelivery {
    match_id: String,
    batter: String,
    bowler: String,
    batsman_runs: String,
    total_runs: String,
    player_dismissed: String,
    dismissal_kind: String,
}

/// How many cells of each normalized column were filled with a sentinel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillCounts {
    pub city: usize,
    pub winner: usize,
    pub player_of_match: usize,
}

// ---------------------------------------------------------------------------
// Cell helpers
// ---------------------------------------------------------------------------

fn is_absent(cell: &str) -> bool {
    NA_MARKERS.contains(&cell.trim())
}

fn invalid(row: u64, column: &'static str, message: String) -> LoadError {
    LoadError::InvalidValue {
        path: READER.into(),
        row,
        column,
        message,
    }
}

fn required(
    interner: &mut Interner,
    cell: &str,
    row: u64,
    column: &'static str,
) -> Result<Name, LoadError> {
    if is_absent(cell) {
        return Err(invalid(row, column, "value is missing".into()));
    }
    Ok(interner.intern(cell.trim()))
}

fn optional(interner: &mut Interner, cell: &str) -> Option<Name> {
    if is_absent(cell) {
        None
    } else {
        Some(interner.intern(cell.trim()))
    }
}

fn or_sentinel(interner: &mut Interner, cell: &str, sentinel: &str, filled: &mut usize) -> Name {
    optional(interner, cell).unwrap_or_else(|| {
        *filled += 1;
        interner.intern(sentinel)
    })
}

/// Parse a non-negative integer cell. Integral floats such as `4.0` are
/// accepted because spreadsheet exports commonly write them that way.
fn parse_count(cell: &str, row: u64, column: &'static str) -> Result<u64, LoadError> {
    let text = cell.trim();
    if let Ok(v) = text.parse::<u64>() {
        return Ok(v);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(invalid(
            row,
            column,
            format!("expected a non-negative integer, got '{text}'"),
        )),
    }
}

fn parse_runs(cell: &str, row: u64, column: &'static str) -> Result<u32, LoadError> {
    let v = parse_count(cell, row, column)?;
    u32::try_from(v).map_err(|_| invalid(row, column, format!("run count {v} is out of range")))
}

fn open_csv<R: Read>(rdr: R, required_columns: &[&str]) -> Result<csv::Reader<R>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(rdr);
    let headers = reader.headers().map_err(|e| LoadError::Csv {
        path: READER.into(),
        source: e,
    })?;
    let missing: Vec<String> = required_columns
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            path: READER.into(),
            columns: missing,
        });
    }
    Ok(reader)
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

/// Read and normalize the match table. `city` and `player_of_match` fall back
/// to "Unknown", `winner` to "No Result"; `result` keeps its absence.
pub fn load_matches_from_reader<R: Read>(
    rdr: R,
    interner: &mut Interner,
) -> Result<(Vec<MatchRecord>, FillCounts), LoadError> {
    let mut reader = open_csv(rdr, MATCH_COLUMNS)?;
    let mut matches = Vec::new();
    let mut fills = FillCounts::default();

    for (i, result) in reader.deserialize::<RawMatch>().enumerate() {
        let row = i as u64 + 1;
        let raw = result.map_err(|e| LoadError::Csv {
            path: READER.into(),
            source: e,
        })?;

        matches.push(MatchRecord {
            id: parse_count(&raw.id, row, "id")?,
            season: required(interner, &raw.season, row, "season")?,
            city: or_sentinel(interner, &raw.city, UNKNOWN, &mut fills.city),
            venue: required(interner, &raw.venue, row, "venue")?,
            team1: required(interner, &raw.team1, row, "team1")?,
            team2: required(interner, &raw.team2, row, "team2")?,
            toss_winner: required(interner, &raw.toss_winner, row, "toss_winner")?,
            winner: or_sentinel(interner, &raw.winner, NO_RESULT, &mut fills.winner),
            result: optional(interner, &raw.result),
            player_of_match: or_sentinel(
                interner,
                &raw.player_of_match,
                UNKNOWN,
                &mut fills.player_of_match,
            ),
        });
    }

    debug!(
        "normalized match table: city={} winner={} player_of_match={} sentinel fills",
        fills.city, fills.winner, fills.player_of_match
    );
    Ok((matches, fills))
}

/// Read the delivery table. The `season` column is left empty until
/// `Tables::join` fills it.
pub fn load_deliveries_from_reader<R: Read>(
    rdr: R,
    interner: &mut Interner,
) -> Result<Vec<DeliveryRecord>, LoadError> {
    let mut reader = open_csv(rdr, DELIVERY_COLUMNS)?;
    let mut deliveries = Vec::new();
    let mut mismatched_dismissals = 0usize;

    for (i, result) in reader.deserialize::<RawDelivery>().enumerate() {
        let row = i as u64 + 1;
        let raw = result.map_err(|e| LoadError::Csv {
            path: READER.into(),
            source: e,
        })?;

        let batsman_runs = parse_runs(&raw.batsman_runs, row, "batsman_runs")?;
        let total_runs = parse_runs(&raw.total_runs, row, "total_runs")?;
        if total_runs < batsman_runs {
            return Err(invalid(
                row,
                "total_runs",
                format!("total_runs {total_runs} is less than batsman_runs {batsman_runs}"),
            ));
        }

        let player_dismissed = optional(interner, &raw.player_dismissed);
        let dismissal_kind = optional(interner, &raw.dismissal_kind);
        if player_dismissed.is_some() != dismissal_kind.is_some() {
            mismatched_dismissals += 1;
        }

        deliveries.push(DeliveryRecord {
            match_id: parse_count(&raw.match_id, row, "match_id")?,
            batter: required(interner, &raw.batter, row, "batter")?,
            bowler: required(interner, &raw.bowler, row, "bowler")?,
            batsman_runs,
            total_runs,
            player_dismissed,
            dismissal_kind,
            season: None,
        });
    }

    if mismatched_dismissals > 0 {
        warn!(
            "{} deliveries have player_dismissed and dismissal_kind disagreeing on presence",
            mismatched_dismissals
        );
    }
    Ok(deliveries)
}

impl Tables {
    /// Load both tables from in-memory readers and join them. Shares one
    /// interner across both tables.
    pub fn from_readers<M: Read, D: Read>(matches: M, deliveries: D) -> Result<Tables, LoadError> {
        let mut interner = Interner::new();
        let (matches, _) = load_matches_from_reader(matches, &mut interner)?;
        let deliveries = load_deliveries_from_reader(deliveries, &mut interner)?;
        Tables::join(matches, deliveries)
    }
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open_file(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load and normalize the match table from a CSV file.
pub fn load_matches(
    path: &Path,
    interner: &mut Interner,
) -> Result<(Vec<MatchRecord>, FillCounts), LoadError> {
    let file = open_file(path)?;
    load_matches_from_reader(file, interner).map_err(|e| e.with_path(&path.display().to_string()))
}

/// Load the delivery table from a CSV file.
pub fn load_deliveries(
    path: &Path,
    interner: &mut Interner,
) -> Result<Vec<DeliveryRecord>, LoadError> {
    let file = open_file(path)?;
    load_deliveries_from_reader(file, interner)
        .map_err(|e| e.with_path(&path.display().to_string()))
}

/// Load both tables from the configured paths and join them.
pub fn load_tables(paths: &DataPaths) -> Result<Tables, LoadError> {
    info!(
        "Loading match data from {} and delivery data from {}",
        paths.matches, paths.deliveries
    );
    let mut interner = Interner::new();
    let (matches, fills) = load_matches(Path::new(&paths.matches), &mut interner)?;
    let deliveries = load_deliveries(Path::new(&paths.deliveries), &mut interner)?;
    let tables = Tables::join(matches, deliveries)?;
    info!(
        "Loaded {} matches and {} deliveries ({} distinct labels; \
         filled {} cities, {} winners, {} awards)",
        tables.matches().len(),
        tables.deliveries().len(),
        interner.distinct_count(),
        fills.city,
        fills.winner,
        fills.player_of_match
    );
    Ok(tables)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
