//! Time-series utilities behind the series builder.
//!
//! Modules include:
//! - `group`: collapse same-day entries (last write wins, references accumulate)
//! - `derive`: deltas, growth ratios and closed-case ratios
//! - `doubling`: doubling-time estimate by interpolation against history
//! - `expand`: calendar gap filling with trailing averages
//! - `pressure`: new cases measured against active cases
/// Per-day derivations over index-aligned count columns.
pub mod derive;
/// Doubling-time interpolation.
pub mod doubling;
/// Calendar expansion of daily deltas with trailing averages.
pub mod expand;
/// Same-day grouping of raw entries.
pub mod group;
/// New cases versus active cases.
pub mod pressure;
/// Shared invariant checks.
pub mod util;
