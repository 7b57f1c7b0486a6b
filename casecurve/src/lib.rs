//! casecurve turns a daily COVID-19 case log into derived statistics.
//!
//! Overview
//! - Decodes the append-only JSON case log (`[date, active, cured, death,
//!   migrated, ref_time, ref_link, ref_comment]` rows) into `RawEntry` values.
//! - Collapses same-day entries: the last snapshot wins, references accumulate.
//! - Derives deltas, growth ratios, closed-case percents, cured-to-death ratio,
//!   case fatality rate and a doubling-time estimate, index-aligned by date.
//! - Exposes undefined values as `Metric::Undefined`; `DaySeries::to_frame`
//!   flattens them to the `-1.0` sentinel for renderers.
//!
//! Every build is pure: a fresh `DaySeries` per call, no shared state, so one
//! `CaseCurve` can be used from any number of threads.
//!
//! Examples
//! ```rust
//! use casecurve::CaseCurve;
//!
//! let log = r#"[
//!   ["2020-03-01", 100, 0, 0, 0, "2020-03-01 00:00", "https://example.org/a", ""],
//!   ["2020-03-02", 150, 0, 0, 0, "2020-03-02 00:00", "https://example.org/b", ""],
//!   ["2020-03-03", 200, 0, 0, 0, "2020-03-03 00:00", "https://example.org/c", ""]
//! ]"#;
//!
//! let curve = CaseCurve::builder().build()?;
//! let series = curve.load_series(log)?;
//! assert_eq!(series.total_deltas, vec![100, 50, 50]);
//! assert_eq!(series.doubling_times[2].value(), Some(2.0));
//! # Ok::<(), casecurve::DataIntegrityError>(())
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{CaseCurve, CaseCurveBuilder, SeriesReport};
pub use casecurve_core::{
    ActivePressure, BuildConfig, DailyExpansion, DataIntegrityError, DaySeries, Metric, RawEntry,
    Reference, SeriesFrame, UNDEFINED, parse_log,
};
