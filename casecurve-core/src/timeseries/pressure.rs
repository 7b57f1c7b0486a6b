use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::Metric;
use crate::timeseries::expand::calendar;

/// New cases measured against active cases, one value per calendar day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivePressure {
    /// Every calendar day between the first and last reported date.
    pub dates: Vec<NaiveDate>,
    /// New cases as a percent of the previous day's active cases.
    pub new_case_percents: Vec<Metric>,
    /// Geometric mean of the trailing `window` daily percents.
    pub average_percents: Vec<Metric>,
    /// Compound daily growth of active cases over the last `window` days, in percent.
    pub active_cagrs: Vec<Metric>,
}

/// Compare daily new cases against the active-case load.
///
/// Walks every calendar day between the first and last of `dates`. Missing
/// days have zero new cases; active counts carry forward from the last
/// reported day. For each day:
///
/// - percent: `100 * new / active(yesterday)`, undefined when yesterday's
///   active count is zero;
/// - average: `100 * (prod(1 + p / 100) ^ (1 / n) - 1)` over the last `n <= window`
///   percents, undefined when any of them is undefined or the product is not positive;
/// - CAGR: `100 * ((active(today) / active(today - window)) ^ (1 / window) - 1)`,
///   undefined when the earlier count is zero.
///
/// A `window` of zero is treated as one.
#[must_use]
pub fn active_pressure(
    dates: &[NaiveDate],
    new_cases: &[i64],
    active: &[u64],
    window: usize,
) -> ActivePressure {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return ActivePressure::default();
    };
    let window = window.max(1);
    let lag = Days::new(u64::try_from(window).unwrap_or(u64::MAX));
    let new_by_date: BTreeMap<NaiveDate, i64> =
        dates.iter().copied().zip(new_cases.iter().copied()).collect();
    let active_by_date: BTreeMap<NaiveDate, u64> =
        dates.iter().copied().zip(active.iter().copied()).collect();
    let lookup = |day: Option<NaiveDate>, carried: u64| {
        day.and_then(|d| active_by_date.get(&d).copied())
            .unwrap_or(carried)
    };

    let mut out = ActivePressure::default();
    let (mut prev_active, mut curr_active, mut week_ago_active) = (0u64, 0u64, 0u64);

    for day in calendar(first, last) {
        let new = new_by_date.get(&day).copied().unwrap_or(0);
        prev_active = lookup(day.checked_sub_days(Days::new(1)), prev_active);
        curr_active = lookup(Some(day), curr_active);
        week_ago_active = lookup(day.checked_sub_days(lag), week_ago_active);

        let percent = if prev_active == 0 {
            Metric::Undefined
        } else {
            Metric::Value(100.0 * new as f64 / prev_active as f64)
        };
        out.dates.push(day);
        out.new_case_percents.push(percent);
        out.average_percents.push(geometric_mean_percent(
            &out.new_case_percents[out.new_case_percents.len().saturating_sub(window)..],
        ));
        out.active_cagrs.push(if week_ago_active == 0 {
            Metric::Undefined
        } else {
            let ratio = curr_active as f64 / week_ago_active as f64;
            Metric::Value(100.0 * (ratio.powf(1.0 / window as f64) - 1.0))
        });
    }
    out
}

fn geometric_mean_percent(percents: &[Metric]) -> Metric {
    let mut product = 1.0;
    for p in percents {
        let Metric::Value(p) = *p else {
            return Metric::Undefined;
        };
        product *= 1.0 + p / 100.0;
    }
    if product <= 0.0 || percents.is_empty() {
        return Metric::Undefined;
    }
    Metric::Value(100.0 * (product.powf(1.0 / percents.len() as f64) - 1.0))
}
