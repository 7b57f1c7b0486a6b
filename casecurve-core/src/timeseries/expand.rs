use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

/// A daily series laid out on every calendar day between its first and last
/// date, with a trailing average per day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyExpansion {
    /// Every calendar day, ascending.
    pub dates: Vec<NaiveDate>,
    /// Value per day; days missing from the source are zero.
    pub values: Vec<i64>,
    /// Mean of the last `window` values up to and including the day (fewer at the start).
    pub averages: Vec<f64>,
}

impl DailyExpansion {
    /// Number of calendar days covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the expansion covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Drop the leading run of zero-valued days (e.g. weeks before the first death).
    #[must_use]
    pub fn trim_leading_zeros(mut self) -> Self {
        let start = self
            .values
            .iter()
            .position(|&v| v != 0)
            .unwrap_or(self.values.len());
        self.dates.drain(..start);
        self.values.drain(..start);
        self.averages.drain(..start);
        self
    }
}

/// Iterate every calendar day from `first` to `last`, inclusive.
pub(crate) fn calendar(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(first), |d| d.checked_add_days(Days::new(1)))
        .take_while(move |d| *d <= last)
}

/// Expand index-aligned `dates`/`values` (typically daily deltas) onto every
/// calendar day and compute a trailing `window`-day average.
///
/// Days absent from `dates` count as zero, both in `values` and in the
/// averages. A `window` of zero is treated as one.
#[must_use]
pub fn expand_daily(dates: &[NaiveDate], values: &[i64], window: usize) -> DailyExpansion {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return DailyExpansion::default();
    };
    let window = window.max(1);
    let by_date: BTreeMap<NaiveDate, i64> =
        dates.iter().copied().zip(values.iter().copied()).collect();

    let mut out = DailyExpansion::default();
    for day in calendar(first, last) {
        out.dates.push(day);
        out.values.push(by_date.get(&day).copied().unwrap_or(0));
        let tail = &out.values[out.values.len().saturating_sub(window)..];
        let sum: i64 = tail.iter().sum();
        out.averages.push(sum as f64 / tail.len() as f64);
    }
    out
}
