use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timeseries::derive::{
    closed_percents, cured_ratios, deltas, fatality_percents, growths,
};
use crate::timeseries::doubling::doubling_times;
use crate::timeseries::expand::{DailyExpansion, expand_daily};
use crate::timeseries::group::group_by_date;
use crate::timeseries::pressure::{ActivePressure, active_pressure};
use crate::{BuildConfig, DataIntegrityError, Metric, RawEntry, Reference};

/// Derived statistics for a case log, one element per distinct date.
///
/// Every vector is index-aligned with `dates`, so renderers can zip them by
/// position. Values that cannot be computed are [`Metric::Undefined`]; use
/// [`DaySeries::to_frame`] for the flat sentinel-encoded shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DaySeries {
    /// Distinct dates, strictly increasing.
    pub dates: Vec<NaiveDate>,

    /// Cumulative active cases.
    pub active: Vec<u64>,
    /// Cumulative cured cases (migrated folded in).
    pub cured: Vec<u64>,
    /// Cumulative deaths.
    pub death: Vec<u64>,
    /// Cumulative confirmed cases.
    pub total: Vec<u64>,
    /// Cumulative closed cases: `cured + death`, with migrated already inside `cured`.
    pub closed: Vec<u64>,

    /// Day-over-day change in active cases.
    pub active_deltas: Vec<i64>,
    /// Day-over-day change in cured cases.
    pub cured_deltas: Vec<i64>,
    /// Day-over-day change in deaths.
    pub death_deltas: Vec<i64>,
    /// Day-over-day change in confirmed cases (new cases).
    pub total_deltas: Vec<i64>,

    /// Today's active count over yesterday's.
    pub active_growths: Vec<Metric>,
    /// Today's cured count over yesterday's.
    pub cured_growths: Vec<Metric>,
    /// Today's death count over yesterday's.
    pub death_growths: Vec<Metric>,
    /// Today's total over yesterday's.
    pub total_growths: Vec<Metric>,

    /// Cured share of closed cases, in percent.
    pub cured_percents: Vec<Metric>,
    /// Death share of closed cases, in percent.
    pub death_percents: Vec<Metric>,
    /// Cured cases per death.
    pub cured_ratios: Vec<Metric>,
    /// Deaths as a percent of total cases.
    pub fatality_percents: Vec<Metric>,
    /// Days the total took to double, interpolated against history.
    pub doubling_times: Vec<Metric>,

    /// References for each date, in arrival order.
    pub references: Vec<Vec<Reference>>,
    /// Resolved last-reference timestamp for each date.
    pub last_reference_times: Vec<NaiveDateTime>,
}

impl DaySeries {
    /// Number of distinct dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Position of `date` in the series.
    #[must_use]
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// Daily new cases on every calendar day with a trailing `window`-day average.
    #[must_use]
    pub fn new_cases_daily(&self, window: usize) -> DailyExpansion {
        expand_daily(&self.dates, &self.total_deltas, window)
    }

    /// Daily new recoveries on every calendar day with a trailing average.
    #[must_use]
    pub fn new_cured_daily(&self, window: usize) -> DailyExpansion {
        expand_daily(&self.dates, &self.cured_deltas, window)
    }

    /// Daily new deaths with a trailing average, starting at the first day with a death.
    #[must_use]
    pub fn new_deaths_daily(&self, window: usize) -> DailyExpansion {
        expand_daily(&self.dates, &self.death_deltas, window).trim_leading_zeros()
    }

    /// New cases against active cases on every calendar day.
    #[must_use]
    pub fn active_pressure(&self, window: usize) -> ActivePressure {
        active_pressure(&self.dates, &self.total_deltas, &self.active, window)
    }

    /// Flatten into parallel plain vectors with undefined values encoded as
    /// [`crate::UNDEFINED`].
    #[must_use]
    pub fn to_frame(&self) -> SeriesFrame {
        let flat = |v: &[Metric]| v.iter().map(|m| m.to_sentinel()).collect::<Vec<f64>>();
        SeriesFrame {
            dates: self.dates.clone(),
            active: self.active.clone(),
            cured: self.cured.clone(),
            death: self.death.clone(),
            total: self.total.clone(),
            closed: self.closed.clone(),
            active_deltas: self.active_deltas.clone(),
            cured_deltas: self.cured_deltas.clone(),
            death_deltas: self.death_deltas.clone(),
            total_deltas: self.total_deltas.clone(),
            active_growths: flat(&self.active_growths),
            cured_growths: flat(&self.cured_growths),
            death_growths: flat(&self.death_growths),
            total_growths: flat(&self.total_growths),
            cured_percents: flat(&self.cured_percents),
            death_percents: flat(&self.death_percents),
            cured_ratios: flat(&self.cured_ratios),
            fatality_percents: flat(&self.fatality_percents),
            doubling_times: flat(&self.doubling_times),
            references: self.references.clone(),
            last_reference_times: self.last_reference_times.clone(),
        }
    }
}

/// Output shape for renderers: fixed-length numeric vectors, index-aligned
/// with `dates`, where every undefined value is [`crate::UNDEFINED`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    /// See [`DaySeries::dates`].
    pub dates: Vec<NaiveDate>,
    /// See [`DaySeries::active`].
    pub active: Vec<u64>,
    /// See [`DaySeries::cured`].
    pub cured: Vec<u64>,
    /// See [`DaySeries::death`].
    pub death: Vec<u64>,
    /// See [`DaySeries::total`].
    pub total: Vec<u64>,
    /// See [`DaySeries::closed`].
    pub closed: Vec<u64>,
    /// See [`DaySeries::active_deltas`].
    pub active_deltas: Vec<i64>,
    /// See [`DaySeries::cured_deltas`].
    pub cured_deltas: Vec<i64>,
    /// See [`DaySeries::death_deltas`].
    pub death_deltas: Vec<i64>,
    /// See [`DaySeries::total_deltas`].
    pub total_deltas: Vec<i64>,
    /// Active growth ratio, or the sentinel.
    pub active_growths: Vec<f64>,
    /// Cured growth ratio, or the sentinel.
    pub cured_growths: Vec<f64>,
    /// Death growth ratio, or the sentinel.
    pub death_growths: Vec<f64>,
    /// Total growth ratio, or the sentinel.
    pub total_growths: Vec<f64>,
    /// Cured share of closed cases, or the sentinel.
    pub cured_percents: Vec<f64>,
    /// Death share of closed cases, or the sentinel.
    pub death_percents: Vec<f64>,
    /// Cured per death, or the sentinel.
    pub cured_ratios: Vec<f64>,
    /// Deaths as a percent of total, or the sentinel.
    pub fatality_percents: Vec<f64>,
    /// Doubling time in days, or the sentinel.
    pub doubling_times: Vec<f64>,
    /// See [`DaySeries::references`].
    pub references: Vec<Vec<Reference>>,
    /// See [`DaySeries::last_reference_times`].
    pub last_reference_times: Vec<NaiveDateTime>,
}

/// Build the derived series from a chronological entry log.
///
/// Entries dated in `excluded_dates` are dropped before grouping; the days
/// around them compute deltas as if they never existed.
///
/// # Errors
/// See [`build_with_config`].
pub fn build<I>(
    entries: I,
    excluded_dates: &BTreeSet<NaiveDate>,
) -> Result<DaySeries, DataIntegrityError>
where
    I: IntoIterator<Item = RawEntry>,
{
    let cfg = BuildConfig {
        excluded_dates: excluded_dates.clone(),
        ..BuildConfig::default()
    };
    build_with_config(entries, &cfg)
}

/// Build the derived series from a chronological entry log using `cfg`.
///
/// - Same-day entries collapse: the last one's counts win, all references are kept.
/// - A day whose last reference was published on another date resolves its
///   reference time to `cfg.end_of_day` on its own date.
/// - The input is never sorted; an empty log yields an empty series.
///
/// # Errors
/// - `Malformed` if entries are not in non-decreasing date order.
/// - `Inconsistent` if counts overflow or closed-case percents do not sum to 100.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "casecurve_core::series::build",
        skip_all,
        fields(excluded = cfg.excluded_dates.len()),
    )
)]
pub fn build_with_config<I>(entries: I, cfg: &BuildConfig) -> Result<DaySeries, DataIntegrityError>
where
    I: IntoIterator<Item = RawEntry>,
{
    let days = group_by_date(entries, &cfg.excluded_dates)?;

    let mut s = DaySeries::default();
    for day in &days {
        s.dates.push(day.date);
        s.active.push(day.active);
        s.cured.push(day.cured);
        s.death.push(day.death);
        s.total.push(day.total);
        s.closed.push(day.closed);
        s.last_reference_times
            .push(day.last_reference_time(cfg.end_of_day));

        #[cfg(feature = "tracing")]
        if day.references.last().is_some_and(|r| r.date() != day.date) {
            tracing::trace!(date = %day.date, "late reference; using end of day");
        }
    }

    let (cured_percents, death_percents) =
        closed_percents(&s.dates, &s.cured, &s.death, &s.closed)?;
    s.cured_percents = cured_percents;
    s.death_percents = death_percents;
    s.cured_ratios = cured_ratios(&s.cured, &s.death);
    s.fatality_percents = fatality_percents(&s.death, &s.total);

    s.active_deltas = deltas(&s.active);
    s.cured_deltas = deltas(&s.cured);
    s.death_deltas = deltas(&s.death);
    s.total_deltas = deltas(&s.total);
    s.active_growths = growths(&s.active);
    s.cured_growths = growths(&s.cured);
    s.death_growths = growths(&s.death);
    s.total_growths = growths(&s.total);
    s.doubling_times = doubling_times(&s.total, &s.last_reference_times);

    s.references = days.into_iter().map(|d| d.references).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(days = s.len(), "built day series");

    Ok(s)
}
