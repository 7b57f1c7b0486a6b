//! Per-day derivations over index-aligned count columns.
//!
//! Inputs are columns already validated by grouping, so counts fit in `i64`.

use chrono::NaiveDate;

use crate::timeseries::util::ensure_closed_identity;
use crate::{DataIntegrityError, Metric};

fn signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Day-over-day differences; the first day's delta is its own count.
///
/// Negative deltas are kept; they mark report corrections.
#[must_use]
pub fn deltas(counts: &[u64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(counts.len());
    let mut prev = 0i64;
    for &c in counts {
        let cur = signed(c);
        out.push(cur - prev);
        prev = cur;
    }
    out
}

/// Ratio of each day's count to the previous day's.
///
/// The first day is always undefined, as is any day following a zero count.
#[must_use]
pub fn growths(counts: &[u64]) -> Vec<Metric> {
    if counts.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(counts.len());
    out.push(Metric::Undefined);
    out.extend(counts.windows(2).map(|w| Metric::ratio(w[1], w[0])));
    out
}

/// Cured and death shares of closed cases, in percent.
///
/// Both are undefined on days without closed cases.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Inconsistent)` on the first day where the
/// two percents do not add up to 100.
pub fn closed_percents(
    dates: &[NaiveDate],
    cured: &[u64],
    death: &[u64],
    closed: &[u64],
) -> Result<(Vec<Metric>, Vec<Metric>), DataIntegrityError> {
    let mut cured_out = Vec::with_capacity(dates.len());
    let mut death_out = Vec::with_capacity(dates.len());
    for (i, &date) in dates.iter().enumerate() {
        let c = Metric::percent(cured[i], closed[i]);
        let d = Metric::percent(death[i], closed[i]);
        if let (Metric::Value(cp), Metric::Value(dp)) = (c, d) {
            ensure_closed_identity(date, cp, dp)?;
        }
        cured_out.push(c);
        death_out.push(d);
    }
    Ok((cured_out, death_out))
}

/// Cured-to-death ratio per day; undefined on days without deaths.
#[must_use]
pub fn cured_ratios(cured: &[u64], death: &[u64]) -> Vec<Metric> {
    cured
        .iter()
        .zip(death)
        .map(|(&c, &d)| Metric::ratio(c, d))
        .collect()
}

/// Case fatality rate: deaths as a percent of total cases.
#[must_use]
pub fn fatality_percents(death: &[u64], total: &[u64]) -> Vec<Metric> {
    death
        .iter()
        .zip(total)
        .map(|(&d, &t)| Metric::percent(d, t))
        .collect()
}
