// Ranked (label, value) rows and the grouping primitives behind them.

use ipl_core::Name;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One row of an aggregation result: a category and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<V> {
    pub label: Name,
    pub value: V,
}

impl<V> Bucket<V> {
    pub fn new(label: Name, value: V) -> Self {
        Bucket { label, value }
    }
}

/// Sum values per label, sorted by total descending.
///
/// Labels with equal totals keep the order in which they were first seen.
pub fn sum_by<'a, I>(pairs: I) -> Vec<Bucket<u64>>
where
    I: IntoIterator<Item = (&'a Name, u64)>,
{
    let mut index: HashMap<&'a Name, usize> = HashMap::new();
    let mut buckets: Vec<Bucket<u64>> = Vec::new();
    for (label, value) in pairs {
        match index.get(label) {
            Some(&i) => buckets[i].value += value,
            None => {
                index.insert(label, buckets.len());
                buckets.push(Bucket::new(label.clone(), value));
            }
        }
    }
    // sort_by is stable, which preserves first-seen order among ties.
    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets
}

/// Occurrences per label, sorted by count descending, ties by first sighting.
pub fn value_counts<'a, I>(labels: I) -> Vec<Bucket<u64>>
where
    I: IntoIterator<Item = &'a Name>,
{
    sum_by(labels.into_iter().map(|label| (label, 1)))
}

/// Sum values per season label in ascending season order.
pub fn by_season<'a, I>(pairs: I) -> Vec<Bucket<u64>>
where
    I: IntoIterator<Item = (&'a Name, u64)>,
{
    let mut totals: BTreeMap<&'a Name, u64> = BTreeMap::new();
    for (season, value) in pairs {
        *totals.entry(season).or_insert(0) += value;
    }
    totals
        .into_iter()
        .map(|(season, total)| Bucket::new(season.clone(), total))
        .collect()
}

/// Keep the `n` highest-ranked rows.
pub fn top<V>(mut buckets: Vec<Bucket<V>>, n: usize) -> Vec<Bucket<V>> {
    buckets.truncate(n);
    buckets
}

pub fn distinct<'a, I>(labels: I) -> usize
where
    I: IntoIterator<Item = &'a Name>,
{
    labels.into_iter().collect::<HashSet<_>>().len()
}
