//! Shared helpers for count-series invariants.

use crate::DataIntegrityError;
use chrono::NaiveDate;

/// Tolerance for the closed-case percent identity.
pub const PERCENT_SUM_TOLERANCE: f64 = 1e-9;

/// Ensure a count fits the signed range used for deltas.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Inconsistent)` if `count` exceeds `i64::MAX`.
pub fn ensure_signed_range(date: NaiveDate, count: u64) -> Result<i64, DataIntegrityError> {
    i64::try_from(count).map_err(|_| {
        DataIntegrityError::inconsistent(date, format!("count {count} exceeds the signed range"))
    })
}

/// Ensure cured and death percents of closed cases add up to 100.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Inconsistent)` if the sum differs from 100
/// by more than [`PERCENT_SUM_TOLERANCE`].
pub fn ensure_closed_identity(
    date: NaiveDate,
    cured_percent: f64,
    death_percent: f64,
) -> Result<(), DataIntegrityError> {
    let sum = cured_percent + death_percent;
    if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        return Err(DataIntegrityError::inconsistent(
            date,
            format!("cured {cured_percent}% + death {death_percent}% of closed cases = {sum}%"),
        ));
    }
    Ok(())
}

/// Ensure `date` does not precede the previously seen date.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Malformed)` for an entry dated before `last`.
pub fn ensure_chronological(
    index: usize,
    last: Option<NaiveDate>,
    date: NaiveDate,
) -> Result<(), DataIntegrityError> {
    match last {
        Some(prev) if date < prev => Err(DataIntegrityError::malformed(
            index,
            format!("date {date} precedes {prev}; the log must be chronological"),
        )),
        _ => Ok(()),
    }
}
