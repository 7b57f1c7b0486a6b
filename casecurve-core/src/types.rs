//! Re-export of the shared data model from `casecurve-types`.
// Consolidated re-exports so downstream crates can depend on `casecurve-core` only

pub use casecurve_types::{
    BuildConfig, DATE_FORMAT, DataIntegrityError, Metric, REFERENCE_TIMESTAMP_FORMAT, RawEntry,
    Reference, UNDEFINED,
};
