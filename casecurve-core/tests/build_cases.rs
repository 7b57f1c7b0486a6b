mod common;

use std::collections::BTreeSet;

use casecurve_core::{BuildConfig, DataIntegrityError, Metric, UNDEFINED, build, build_with_config};
use casecurve_core::timeseries::util::{PERCENT_SUM_TOLERANCE, ensure_closed_identity};
use chrono::NaiveTime;
use common::{d, entry, entry_at, totals_log, ts};

#[test]
fn derives_cumulative_columns_with_migrated_folded_into_cured() {
    let s = build(vec![entry("2020-03-01", [50, 30, 10, 10])], &BTreeSet::new()).unwrap();

    assert_eq!(s.len(), 1);
    assert_eq!(s.active, vec![50]);
    assert_eq!(s.cured, vec![40]);
    assert_eq!(s.death, vec![10]);
    assert_eq!(s.closed, vec![50]);
    assert_eq!(s.total, vec![100]);
    assert_eq!(s.cured_percents, vec![Metric::Value(80.0)]);
    assert_eq!(s.death_percents, vec![Metric::Value(20.0)]);
    assert_eq!(s.cured_ratios, vec![Metric::Value(4.0)]);
    assert_eq!(s.fatality_percents, vec![Metric::Value(10.0)]);
}

#[test]
fn first_day_delta_is_own_count_and_growth_undefined() {
    let s = build(totals_log(&[7, 9]), &BTreeSet::new()).unwrap();
    assert_eq!(s.total_deltas, vec![7, 2]);
    assert_eq!(s.total_growths[0], Metric::Undefined);
    assert_eq!(s.active_growths[0], Metric::Undefined);
    assert_eq!(s.cured_growths[0], Metric::Undefined);
    assert_eq!(s.death_growths[0], Metric::Undefined);
    assert_eq!(s.doubling_times[0], Metric::Undefined);
}

#[test]
fn growth_after_zero_is_undefined() {
    let s = build(totals_log(&[0, 4, 6]), &BTreeSet::new()).unwrap();
    assert_eq!(s.total_growths, vec![Metric::Undefined, Metric::Undefined, Metric::Value(1.5)]);
}

#[test]
fn negative_deltas_are_surfaced() {
    let s = build(totals_log(&[10, 8]), &BTreeSet::new()).unwrap();
    assert_eq!(s.total_deltas, vec![10, -2]);
    assert_eq!(s.total_growths[1], Metric::Value(0.8));
}

#[test]
fn zero_denominators_are_undefined_not_errors() {
    let s = build(vec![entry("2020-03-01", [5, 0, 0, 0])], &BTreeSet::new()).unwrap();
    assert_eq!(s.cured_percents, vec![Metric::Undefined]);
    assert_eq!(s.death_percents, vec![Metric::Undefined]);
    assert_eq!(s.cured_ratios, vec![Metric::Undefined]);
}

#[test]
fn same_day_entries_last_write_wins_and_references_accumulate() {
    let log = vec![
        entry("2020-03-01", [1, 0, 0, 0]),
        entry_at("2020-03-02", [3, 0, 0, 0], "2020-03-02 08:00"),
        entry_at("2020-03-02", [5, 1, 0, 0], "2020-03-02 17:30"),
    ];
    let s = build(log, &BTreeSet::new()).unwrap();

    assert_eq!(s.dates, vec![d("2020-03-01"), d("2020-03-02")]);
    assert_eq!(s.active[1], 5);
    assert_eq!(s.total[1], 6);
    assert_eq!(s.total_deltas[1], 5);
    let times: Vec<_> = s.references[1].iter().map(|r| r.timestamp).collect();
    assert_eq!(times, vec![ts("2020-03-02 08:00"), ts("2020-03-02 17:30")]);
    assert_eq!(s.last_reference_times[1], ts("2020-03-02 17:30"));
}

#[test]
fn late_reference_resolves_to_end_of_day() {
    let log = vec![entry_at("2020-03-01", [1, 0, 0, 0], "2020-03-02 10:15")];
    let s = build(log.clone(), &BTreeSet::new()).unwrap();
    assert_eq!(s.last_reference_times, vec![ts("2020-03-01 23:59")]);

    let cfg = BuildConfig {
        end_of_day: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        ..BuildConfig::default()
    };
    let s = build_with_config(log, &cfg).unwrap();
    assert_eq!(s.last_reference_times, vec![ts("2020-03-01 20:00")]);
}

#[test]
fn only_the_last_reference_decides_the_day_time() {
    let log = vec![
        entry_at("2020-03-01", [1, 0, 0, 0], "2020-03-01 09:00"),
        entry_at("2020-03-01", [2, 0, 0, 0], "2020-03-02 01:00"),
    ];
    let s = build(log, &BTreeSet::new()).unwrap();
    assert_eq!(s.last_reference_times, vec![ts("2020-03-01 23:59")]);
}

#[test]
fn doubling_time_interpolates_between_bracketing_days() {
    let s = build(totals_log(&[100, 150, 200]), &BTreeSet::new()).unwrap();
    assert_eq!(s.doubling_times[1], Metric::Undefined);
    assert_eq!(s.doubling_times[2], Metric::Value(2.0));
}

#[test]
fn doubling_time_with_flat_history() {
    // The walk stops at day 1 (100 <= 200 / 2), so day 2 brackets the crossing.
    let s = build(totals_log(&[100, 100, 200]), &BTreeSet::new()).unwrap();
    assert_eq!(s.doubling_times[2], Metric::Value(1.0));
}

#[test]
fn doubling_time_fractional_crossing_and_reference_times() {
    // Half of 300 is crossed a quarter of the way from day 0 (120) to day 1 (240).
    let log = vec![
        entry("2020-03-01", [120, 0, 0, 0]),
        entry("2020-03-02", [240, 0, 0, 0]),
        entry_at("2020-03-03", [300, 0, 0, 0], "2020-03-03 12:00"),
    ];
    let s = build(log, &BTreeSet::new()).unwrap();
    // 1.5 days from day 1 to day 2 noon, plus 0.75 of the day-0..day-1 span.
    assert_eq!(s.doubling_times[2], Metric::Value(2.25));
}

#[test]
fn doubling_time_undefined_for_zero_total() {
    let s = build(totals_log(&[0, 0]), &BTreeSet::new()).unwrap();
    assert_eq!(s.doubling_times, vec![Metric::Undefined, Metric::Undefined]);
}

#[test]
fn excluded_dates_vanish_and_deltas_skip_the_gap() {
    let log = totals_log(&[10, 999, 30]);
    let excluded: BTreeSet<_> = [d("2020-03-02")].into_iter().collect();
    let s = build(log, &excluded).unwrap();

    assert_eq!(s.dates, vec![d("2020-03-01"), d("2020-03-03")]);
    assert!(s.index_of(d("2020-03-02")).is_none());
    assert_eq!(s.total_deltas, vec![10, 20]);
    assert_eq!(s.total_growths[1], Metric::Value(3.0));
    assert!(s.references.iter().flatten().all(|r| !r.link.ends_with("2020-03-02")));
}

#[test]
fn excluded_out_of_order_entry_is_ignored() {
    let log = vec![
        entry("2020-03-02", [1, 0, 0, 0]),
        entry("2020-03-01", [1, 0, 0, 0]),
    ];
    let excluded: BTreeSet<_> = [d("2020-03-01")].into_iter().collect();
    assert!(build(log, &excluded).is_ok());
}

#[test]
fn out_of_order_dates_are_malformed() {
    let log = vec![
        entry("2020-03-02", [1, 0, 0, 0]),
        entry("2020-03-01", [1, 0, 0, 0]),
    ];
    let err = build(log, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, DataIntegrityError::Malformed { index: Some(1), .. }));
}

#[test]
fn count_overflow_is_inconsistent() {
    let log = vec![entry("2020-03-01", [u64::MAX, 1, 0, 0])];
    let err = build(log, &BTreeSet::new()).unwrap_err();
    assert!(err.is_inconsistent());

    let log = vec![entry("2020-03-01", [u64::MAX / 2 + 1, 0, 0, 0])];
    assert!(build(log, &BTreeSet::new()).unwrap_err().is_inconsistent());
}

#[test]
fn closed_percents_off_by_more_than_tolerance_are_inconsistent() {
    let date = d("2020-03-01");
    let err = ensure_closed_identity(date, 60.0, 30.0).unwrap_err();
    assert!(err.is_inconsistent());
    assert!(matches!(err, DataIntegrityError::Inconsistent { date: at, .. } if at == date));

    assert!(ensure_closed_identity(date, 60.0, 40.0 + PERCENT_SUM_TOLERANCE / 2.0).is_ok());
    assert!(ensure_closed_identity(date, 100.0 / 3.0, 200.0 / 3.0).is_ok());
    assert!(ensure_closed_identity(date, 60.0, 40.0 + 1e-6).is_err());
}

#[test]
fn empty_log_yields_empty_series() {
    let s = build(Vec::new(), &BTreeSet::new()).unwrap();
    assert!(s.is_empty());
    assert!(s.to_frame().dates.is_empty());
}

#[test]
fn frame_uses_sentinel_for_undefined() {
    let s = build(totals_log(&[0, 4]), &BTreeSet::new()).unwrap();
    let f = s.to_frame();
    assert_eq!(f.total_growths, vec![UNDEFINED, UNDEFINED]);
    assert_eq!(f.cured_percents, vec![UNDEFINED, UNDEFINED]);
    assert_eq!(f.doubling_times[0], UNDEFINED);
    assert_eq!(f.total, vec![0, 4]);

    let json = serde_json::to_string(&f).unwrap();
    let back: casecurve_core::SeriesFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
}
