//! Year-indexed result container and the per-year mapping used by every
//! indicator.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;

use iha_series::{FlowSeries, YearPartition};
use rayon::prelude::*;
use serde::Serialize;

/// Mapping from calendar year to one per-year value.
///
/// Keys are exactly the years present in the source series, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnualResult<T> {
    values: BTreeMap<i32, T>,
}

impl<T> AnnualResult<T> {
    /// Value for `year`, if the year is present.
    pub fn get(&self, year: i32) -> Option<&T> {
        self.values.get(&year)
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.keys().copied()
    }

    /// `(year, value)` pairs in ascending year order.
    pub fn iter(&self) -> btree_map::Iter<'_, i32, T> {
        self.values.iter()
    }

    /// Number of years.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no years.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Applies `f` to every value, keeping the years.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> AnnualResult<U> {
        AnnualResult {
            values: self.values.iter().map(|(y, v)| (*y, f(v))).collect(),
        }
    }
}

impl<T> FromIterator<(i32, T)> for AnnualResult<T> {
    fn from_iter<I: IntoIterator<Item = (i32, T)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<i32> for AnnualResult<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `year` is not present, like `BTreeMap`'s `Index`.
    fn index(&self, year: i32) -> &T {
        &self.values[&year]
    }
}

impl<'a, T> IntoIterator for &'a AnnualResult<T> {
    type Item = (&'a i32, &'a T);
    type IntoIter = btree_map::Iter<'a, i32, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Evaluates `f` on every year partition, in parallel across years.
pub(crate) fn per_year<T, F>(series: &FlowSeries, f: F) -> AnnualResult<T>
where
    T: Send,
    F: Fn(&YearPartition<'_>) -> T + Sync,
{
    series
        .annual_partitions()
        .par_iter()
        .map(|part| (part.year(), f(part)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Like [`per_year`], but `f` also receives the partition of the following
/// calendar year when it is present in the series.
pub(crate) fn per_year_with_next<T, F>(series: &FlowSeries, f: F) -> AnnualResult<T>
where
    T: Send,
    F: Fn(&YearPartition<'_>, Option<&YearPartition<'_>>) -> T + Sync,
{
    let parts = series.annual_partitions();
    (0..parts.len())
        .into_par_iter()
        .map(|i| {
            let part = &parts[i];
            let next = parts.get(i + 1).filter(|n| n.year() == part.year() + 1);
            (part.year(), f(part, next))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
