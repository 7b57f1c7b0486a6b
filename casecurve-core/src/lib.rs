//! casecurve-core
//!
//! Derived-statistics engine for a daily case log.
//!
//! - `types`: re-exports of the shared data model from `casecurve-types`.
//! - `load`: decoding of the append-only JSON case log into `RawEntry` values.
//! - `series`: the `DaySeries` result and the `build` entry points.
//! - `timeseries`: grouping, per-day derivations, doubling time and calendar expansions.
//!
//! Everything here is synchronous and pure: `build` reads the supplied entries,
//! returns a freshly constructed `DaySeries` and keeps no state between calls.
#![warn(missing_docs)]

/// Decoding of the JSON case log.
pub mod load;
/// The derived series and the build entry points.
pub mod series;
/// Time-series utilities behind the series builder.
pub mod timeseries;
pub mod types;

pub use load::{parse_log, parse_row};
pub use series::{DaySeries, SeriesFrame, build, build_with_config};
pub use timeseries::doubling::{doubling_time_at, doubling_times};
pub use timeseries::expand::{DailyExpansion, expand_daily};
pub use timeseries::group::{DaySnapshot, group_by_date};
pub use timeseries::pressure::{ActivePressure, active_pressure};
pub use types::*;
