use serde::{Deserialize, Serialize};

/// Reserved out-of-domain value standing in for an undefined metric at the
/// output boundary. Counts, ratios, percents and durations are never negative.
pub const UNDEFINED: f64 = -1.0;

/// A derived value that may not be computable (zero denominator, no
/// doubling-time bracket, first day of a series).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Metric {
    /// A computed value.
    Value(f64),
    /// Not computable for this day.
    #[default]
    Undefined,
}

impl Metric {
    /// `numerator / denominator`, undefined when the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            Self::Undefined
        } else {
            Self::Value(numerator as f64 / denominator as f64)
        }
    }

    /// `100 * part / whole`, undefined when `whole` is zero.
    #[must_use]
    pub fn percent(part: u64, whole: u64) -> Self {
        if whole == 0 {
            Self::Undefined
        } else {
            Self::Value(100.0 * part as f64 / whole as f64)
        }
    }

    /// Returns the inner value, if defined.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// Whether the metric is undefined.
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Flatten to a plain number, using [`UNDEFINED`] for undefined values.
    #[must_use]
    pub const fn to_sentinel(self) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Undefined => UNDEFINED,
        }
    }

    /// Interpret the metric as a growth ratio and express it as percent change,
    /// e.g. a ratio of `1.25` becomes `25.0`.
    #[must_use]
    pub fn growth_percent(self) -> Self {
        match self {
            Self::Value(r) => Self::Value(100.0 * (r - 1.0)),
            Self::Undefined => Self::Undefined,
        }
    }
}

impl From<Option<f64>> for Metric {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Undefined, Self::Value)
    }
}
