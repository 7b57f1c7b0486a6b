use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the casecurve workspace.
///
/// Two kinds are distinguished so callers can tell "malformed input" apart
/// from "internally inconsistent input". Undefined ratios, growths and
/// doubling times are never errors; they are carried as [`crate::Metric::Undefined`].
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataIntegrityError {
    /// A raw entry could not be decoded or violates the shape of the log
    /// (wrong row length, non-numeric count, unparseable date, dates out of order).
    #[error("malformed entry{}: {reason}", fmt_index(.index))]
    Malformed {
        /// Zero-based position of the offending entry in the raw log, when known.
        index: Option<usize>,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The entries decoded fine but break an identity the source must satisfy
    /// (count overflow, closed-case percents not summing to 100).
    #[error("inconsistent data on {date}: {reason}")]
    Inconsistent {
        /// Day on which the identity was violated.
        date: NaiveDate,
        /// Human-readable description of the violated identity.
        reason: String,
    },

    /// Builder configuration rejected before any data was read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn fmt_index(index: &Option<usize>) -> String {
    index.map(|i| format!(" #{i}")).unwrap_or_default()
}

impl DataIntegrityError {
    /// Helper: build a `Malformed` error for the entry at `index`.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Helper: build a `Malformed` error not tied to a specific entry.
    pub fn malformed_log(reason: impl Into<String>) -> Self {
        Self::Malformed {
            index: None,
            reason: reason.into(),
        }
    }

    /// Helper: build an `Inconsistent` error for `date`.
    pub fn inconsistent(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            date,
            reason: reason.into(),
        }
    }

    /// True for decoding/shape failures.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// True for identity violations on otherwise well-formed input.
    #[must_use]
    pub const fn is_inconsistent(&self) -> bool {
        matches!(self, Self::Inconsistent { .. })
    }
}
