use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::timeseries::util::{ensure_chronological, ensure_signed_range};
use crate::{DataIntegrityError, RawEntry, Reference};

/// Cumulative counts for one distinct date after same-day entries collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySnapshot {
    /// Day the counts apply to.
    pub date: NaiveDate,
    /// Active cases.
    pub active: u64,
    /// Cured cases with migrated folded in.
    pub cured: u64,
    /// Deaths.
    pub death: u64,
    /// `cured + death` (migrated already inside `cured`).
    pub closed: u64,
    /// `active + closed`.
    pub total: u64,
    /// Every reference reported for the date, in arrival order.
    pub references: Vec<Reference>,
}

impl DaySnapshot {
    fn open(date: NaiveDate) -> Self {
        Self {
            date,
            active: 0,
            cured: 0,
            death: 0,
            closed: 0,
            total: 0,
            references: Vec::new(),
        }
    }

    fn overwrite(&mut self, e: &RawEntry) -> Result<(), DataIntegrityError> {
        let overflow = || DataIntegrityError::inconsistent(e.date, "cumulative counts overflow");
        let total = e.total().ok_or_else(overflow)?;
        // Deltas are signed; every count is bounded by `total`.
        ensure_signed_range(e.date, total)?;

        self.active = e.active;
        self.cured = e.cured_with_migrated().ok_or_else(overflow)?;
        self.death = e.death;
        self.closed = e.closed().ok_or_else(overflow)?;
        self.total = total;
        Ok(())
    }

    /// Timestamp of the day's last reference, or `end_of_day` on the day's own
    /// date when that reference was published on another date.
    #[must_use]
    pub fn last_reference_time(&self, end_of_day: NaiveTime) -> NaiveDateTime {
        match self.references.last() {
            Some(r) if r.date() == self.date => r.timestamp,
            _ => self.date.and_time(end_of_day),
        }
    }
}

/// Collapse a chronological entry log into one snapshot per distinct date.
///
/// - Entries dated in `excluded` are dropped before grouping.
/// - The first entry for a date opens its snapshot; every entry for that date
///   overwrites the counts (last write wins) and appends its reference.
/// - Snapshot order is the order of first appearance.
///
/// # Errors
/// - `Malformed` if an entry is dated before an earlier (non-excluded) entry.
/// - `Inconsistent` if an entry's counts overflow when summed.
pub fn group_by_date<I>(
    entries: I,
    excluded: &BTreeSet<NaiveDate>,
) -> Result<Vec<DaySnapshot>, DataIntegrityError>
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut days: Vec<DaySnapshot> = Vec::new();

    for (index, e) in entries.into_iter().enumerate() {
        if excluded.contains(&e.date) {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, date = %e.date, "dropping entry for excluded date");
            continue;
        }
        ensure_chronological(index, days.last().map(|d| d.date), e.date)?;

        if days.last().is_some_and(|d| d.date == e.date) {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, date = %e.date, "same-day entry overwrites counts");
        } else {
            days.push(DaySnapshot::open(e.date));
        }
        let last = days.len() - 1;
        let day = &mut days[last];
        day.overwrite(&e)?;
        day.references.push(e.reference);
    }

    Ok(days)
}
