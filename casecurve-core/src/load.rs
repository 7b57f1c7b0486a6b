//! Decoding of the append-only JSON case log.
//!
//! The log is a JSON array of eight-element rows:
//!
//! ```text
//! [date, active, cured, death, migrated, ref_timestamp, ref_link, ref_comment]
//! ```
//!
//! with `date` as `YYYY-MM-DD`, `ref_timestamp` as `YYYY-MM-DD HH:MM` and
//! non-negative integer counts. Reading the log from disk is the caller's job.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::{DATE_FORMAT, DataIntegrityError, REFERENCE_TIMESTAMP_FORMAT, RawEntry, Reference};

#[derive(Deserialize)]
struct LogRow(String, u64, u64, u64, u64, String, String, String);

/// Decode one log row at position `index`.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Malformed)` if the row is not an
/// eight-element array, a count is not a non-negative integer, or the date or
/// reference timestamp does not parse.
pub fn parse_row(index: usize, row: &Value) -> Result<RawEntry, DataIntegrityError> {
    let LogRow(date, active, cured, death, migrated, ref_ts, link, comment) =
        LogRow::deserialize(row).map_err(|e| DataIntegrityError::malformed(index, e.to_string()))?;

    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
        DataIntegrityError::malformed(index, format!("unparseable date {date:?}: {e}"))
    })?;
    let timestamp = NaiveDateTime::parse_from_str(&ref_ts, REFERENCE_TIMESTAMP_FORMAT).map_err(
        |e| DataIntegrityError::malformed(index, format!("unparseable reference time {ref_ts:?}: {e}")),
    )?;

    Ok(RawEntry {
        date,
        active,
        cured,
        death,
        migrated,
        reference: Reference::new(timestamp, link, comment),
    })
}

/// Decode a whole case log.
///
/// Decoding stops at the first bad row; no partial log is returned.
///
/// # Errors
/// Returns `Err(DataIntegrityError::Malformed)` if the text is not a JSON
/// array or any row fails [`parse_row`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "casecurve_core::load::parse_log", skip_all, fields(bytes = json.len()))
)]
pub fn parse_log(json: &str) -> Result<Vec<RawEntry>, DataIntegrityError> {
    let rows: Vec<Value> = serde_json::from_str(json).map_err(|e| {
        DataIntegrityError::malformed_log(format!("case log is not a JSON array of rows: {e}"))
    })?;
    let entries = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(entries = entries.len(), "decoded case log");

    Ok(entries)
}
