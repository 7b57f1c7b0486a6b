#![allow(dead_code)]

use casecurve_core::{RawEntry, Reference};
use chrono::{NaiveDate, NaiveDateTime};

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

/// Entry whose reference is published at `ref_ts`.
pub fn entry_at(date: &str, counts: [u64; 4], ref_ts: &str) -> RawEntry {
    let [active, cured, death, migrated] = counts;
    RawEntry {
        date: d(date),
        active,
        cured,
        death,
        migrated,
        reference: Reference::new(ts(ref_ts), format!("https://example.org/{date}"), ""),
    }
}

/// Entry referenced at midnight of its own date.
pub fn entry(date: &str, counts: [u64; 4]) -> RawEntry {
    entry_at(date, counts, &format!("{date} 00:00"))
}

/// Entries whose totals are all active cases, one per consecutive day from 2020-03-01.
pub fn totals_log(totals: &[u64]) -> Vec<RawEntry> {
    let start = d("2020-03-01");
    totals
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let date = start + chrono::Days::new(i as u64);
            entry(&date.format("%Y-%m-%d").to_string(), [t, 0, 0, 0])
        })
        .collect()
}
