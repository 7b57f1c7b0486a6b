//! Raw observations as they appear in the append-only case log.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date layout used by the case log.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layout used by the case log for reference times.
pub const REFERENCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source citation attached to an observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// When the source published the numbers (minute precision).
    #[serde(with = "minute_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Link to the source.
    pub link: String,
    /// Optional free-text remark about the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Reference {
    /// Build a reference; an empty comment is stored as `None`.
    pub fn new(timestamp: NaiveDateTime, link: impl Into<String>, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        Self {
            timestamp,
            link: link.into(),
            comment: (!comment.is_empty()).then_some(comment),
        }
    }

    /// Calendar date of the reference timestamp.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Whole days between `entry_date` and the reference's own date.
    ///
    /// Zero for a reference published on the day it reports; positive when the
    /// numbers for `entry_date` were only published later.
    #[must_use]
    pub fn days_after(&self, entry_date: NaiveDate) -> i64 {
        (self.date() - entry_date).num_days()
    }
}

/// One observation reported by a reference source.
///
/// Counts are cumulative as of `date`. Several entries may share a date; the
/// last one is the authoritative snapshot for that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Day the counts apply to.
    pub date: NaiveDate,
    /// Currently active cases.
    pub active: u64,
    /// Cured/discharged cases, excluding migrated.
    pub cured: u64,
    /// Deaths.
    pub death: u64,
    /// Cases migrated out of the region.
    pub migrated: u64,
    /// Where the numbers came from.
    pub reference: Reference,
}

impl RawEntry {
    /// Cured count with migrated cases folded in.
    #[must_use]
    pub fn cured_with_migrated(&self) -> Option<u64> {
        self.cured.checked_add(self.migrated)
    }

    /// Closed cases (`cured + death + migrated`); `None` on overflow.
    #[must_use]
    pub fn closed(&self) -> Option<u64> {
        self.cured_with_migrated()?.checked_add(self.death)
    }

    /// Total confirmed cases (`active + cured + death + migrated`); `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.closed()?.checked_add(self.active)
    }
}

mod minute_timestamp {
    use super::REFERENCE_TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(REFERENCE_TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, REFERENCE_TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
