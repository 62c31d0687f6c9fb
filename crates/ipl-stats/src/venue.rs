// Where matches were played.

use crate::bucket::{top, value_counts, Bucket};
use ipl_core::config::Limits;
use ipl_core::Tables;
use serde::Serialize;

pub fn top_venues_by_matches(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(value_counts(tables.matches().iter().map(|m| &m.venue)), n)
}

/// Matches per city. Matches without a recorded city count under "Unknown".
pub fn city_match_distribution(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(value_counts(tables.matches().iter().map(|m| &m.city)), n)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueReport {
    pub top_venues: Vec<Bucket<u64>>,
    pub cities: Vec<Bucket<u64>>,
}

pub fn venue_report(tables: &Tables, limits: &Limits) -> VenueReport {
    VenueReport {
        top_venues: top_venues_by_matches(tables, limits.top_venues),
        cities: city_match_distribution(tables, limits.top_cities),
    }
}
