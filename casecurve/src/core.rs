use chrono::{NaiveDate, NaiveTime};

use casecurve_core::{
    ActivePressure, BuildConfig, DailyExpansion, DataIntegrityError, DaySeries, RawEntry,
    build_with_config, parse_log,
};

/// Series builder configured once and reused for any number of logs.
#[derive(Debug, Clone, Default)]
pub struct CaseCurve {
    pub(crate) cfg: BuildConfig,
}

/// Builder for constructing a [`CaseCurve`] with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct CaseCurveBuilder {
    cfg: BuildConfig,
}

impl CaseCurveBuilder {
    /// Create a new builder with defaults: no excluded dates, late references
    /// resolved to 23:59, 7-day averaging window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: BuildConfig::default(),
        }
    }

    /// Start from an existing configuration (e.g. deserialized from a file).
    #[must_use]
    pub fn config(mut self, cfg: BuildConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Drop every log entry dated `date` before grouping.
    ///
    /// Used to leave out known-bad report days without editing the log; the
    /// neighbouring days compute their deltas as if the day never existed.
    #[must_use]
    pub fn exclude_date(mut self, date: NaiveDate) -> Self {
        self.cfg.excluded_dates.insert(date);
        self
    }

    /// Drop every log entry dated in `dates`.
    #[must_use]
    pub fn exclude_dates<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.cfg.excluded_dates.extend(dates);
        self
    }

    /// Time of day used when a day's last reference was published on a later date.
    #[must_use]
    pub const fn end_of_day(mut self, time: NaiveTime) -> Self {
        self.cfg.end_of_day = time;
        self
    }

    /// Trailing window, in calendar days, for rolling averages and active-case CAGR.
    #[must_use]
    pub const fn average_window(mut self, days: usize) -> Self {
        self.cfg.average_window = days;
        self
    }

    /// Build the [`CaseCurve`].
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the averaging window is zero.
    pub fn build(self) -> Result<CaseCurve, DataIntegrityError> {
        if self.cfg.average_window == 0 {
            return Err(DataIntegrityError::InvalidConfig(
                "average window must be at least one day".to_string(),
            ));
        }
        Ok(CaseCurve { cfg: self.cfg })
    }
}

/// Everything the renderers consume for one log: the per-date series plus the
/// calendar-day views used by the daily charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    /// Per-date derived series.
    pub series: DaySeries,
    /// New cases on every calendar day with trailing averages.
    pub new_cases: DailyExpansion,
    /// New recoveries on every calendar day with trailing averages.
    pub new_cured: DailyExpansion,
    /// New deaths from the first death onwards with trailing averages.
    pub new_deaths: DailyExpansion,
    /// New cases against active cases.
    pub pressure: ActivePressure,
}

impl CaseCurve {
    /// Start building a new `CaseCurve`.
    ///
    /// ```rust
    /// use casecurve::CaseCurve;
    /// use chrono::NaiveDate;
    ///
    /// let curve = CaseCurve::builder()
    ///     .exclude_date(NaiveDate::from_ymd_opt(2020, 2, 4).unwrap())
    ///     .average_window(7)
    ///     .build()?;
    /// assert_eq!(curve.config().excluded_dates.len(), 1);
    /// # Ok::<(), casecurve::DataIntegrityError>(())
    /// ```
    #[must_use]
    pub fn builder() -> CaseCurveBuilder {
        CaseCurveBuilder::new()
    }

    /// The configuration every build uses.
    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.cfg
    }

    /// Build the derived series from chronological entries.
    ///
    /// # Errors
    /// `Malformed` for out-of-order entries; `Inconsistent` for count overflow
    /// or closed-case percents that do not sum to 100.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "casecurve::build_series", skip_all)
    )]
    pub fn build_series<I>(&self, entries: I) -> Result<DaySeries, DataIntegrityError>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        build_with_config(entries, &self.cfg)
    }

    /// Decode a JSON case log and build its derived series.
    ///
    /// # Errors
    /// `Malformed` for undecodable rows or out-of-order dates; `Inconsistent`
    /// as for [`CaseCurve::build_series`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "casecurve::load_series", skip_all, fields(bytes = json.len()))
    )]
    pub fn load_series(&self, json: &str) -> Result<DaySeries, DataIntegrityError> {
        self.build_series(parse_log(json)?)
    }

    /// Build the series and the calendar-day views from chronological entries.
    ///
    /// # Errors
    /// Same as [`CaseCurve::build_series`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "casecurve::report", skip_all)
    )]
    pub fn report<I>(&self, entries: I) -> Result<SeriesReport, DataIntegrityError>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let series = self.build_series(entries)?;
        let window = self.cfg.average_window;
        Ok(SeriesReport {
            new_cases: series.new_cases_daily(window),
            new_cured: series.new_cured_daily(window),
            new_deaths: series.new_deaths_daily(window),
            pressure: series.active_pressure(window),
            series,
        })
    }
}
