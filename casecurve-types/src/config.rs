//! Configuration for the series builder.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Knobs for turning a raw case log into derived series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Report days dropped entirely before grouping (known-bad days), without
    /// touching the source log.
    pub excluded_dates: BTreeSet<NaiveDate>,
    /// Time of day substituted when a day's last reference was published on a
    /// later date.
    pub end_of_day: NaiveTime,
    /// Number of trailing calendar days averaged by the daily expansions.
    pub average_window: usize,
}

impl BuildConfig {
    /// Default trailing window for rolling averages.
    pub const DEFAULT_AVERAGE_WINDOW: usize = 7;

    /// 23:59, the default stand-in for a late reference.
    #[must_use]
    pub fn default_end_of_day() -> NaiveTime {
        NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Whether entries for `date` are dropped.
    #[must_use]
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.excluded_dates.contains(&date)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            excluded_dates: BTreeSet::new(),
            end_of_day: Self::default_end_of_day(),
            average_window: Self::DEFAULT_AVERAGE_WINDOW,
        }
    }
}
