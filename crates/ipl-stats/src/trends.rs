// Season-over-season scoring and outcome distributions.

use crate::bucket::{by_season, top, value_counts, Bucket};
use ipl_core::config::Limits;
use ipl_core::Tables;
use serde::Serialize;

/// Sum of `total_runs` per season, ascending. Deliveries whose match is
/// missing from the match table have no season and are skipped.
pub fn total_runs_per_season(tables: &Tables) -> Vec<Bucket<u64>> {
    by_season(
        tables
            .deliveries()
            .iter()
            .filter_map(|d| d.season.as_ref().map(|s| (s, u64::from(d.total_runs)))),
    )
}

/// Match result types by frequency. Matches without a result type are skipped.
pub fn result_type_distribution(tables: &Tables) -> Vec<Bucket<u64>> {
    value_counts(tables.matches().iter().filter_map(|m| m.result.as_ref()))
}

/// Dismissal kinds by frequency, top `n`.
pub fn dismissal_type_distribution(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(
        value_counts(
            tables
                .deliveries()
                .iter()
                .filter_map(|d| d.dismissal_kind.as_ref()),
        ),
        n,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendsReport {
    pub runs_per_season: Vec<Bucket<u64>>,
    pub result_types: Vec<Bucket<u64>>,
    pub dismissal_types: Vec<Bucket<u64>>,
}

pub fn trends_report(tables: &Tables, limits: &Limits) -> TrendsReport {
    TrendsReport {
        runs_per_season: total_runs_per_season(tables),
        result_types: result_type_distribution(tables),
        dismissal_types: dismissal_type_distribution(tables, limits.top_dismissal_kinds),
    }
}
