//! Shared casecurve data model and configuration primitives.
//!
//! - `RawEntry` / `Reference`: one observation from the append-only case log.
//! - `Metric`: a derived value that may be undefined.
//! - `BuildConfig`: knobs for the series builder.
//! - `DataIntegrityError`: the single error type of the workspace.
#![warn(missing_docs)]

mod config;
mod entry;
mod error;
mod metric;

pub use config::BuildConfig;
pub use entry::{DATE_FORMAT, REFERENCE_TIMESTAMP_FORMAT, RawEntry, Reference};
pub use error::DataIntegrityError;
pub use metric::{Metric, UNDEFINED};
