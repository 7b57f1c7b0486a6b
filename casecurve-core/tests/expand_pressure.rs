mod common;

use std::collections::BTreeSet;

use casecurve_core::{Metric, active_pressure, build, expand_daily};
use common::{d, entry};

#[test]
fn expansion_fills_missing_days_with_zero() {
    let dates = [d("2020-03-01"), d("2020-03-04")];
    let e = expand_daily(&dates, &[4, 8], 7);
    assert_eq!(e.len(), 4);
    assert_eq!(e.dates[1], d("2020-03-02"));
    assert_eq!(e.values, vec![4, 0, 0, 8]);
    assert_eq!(e.averages, vec![4.0, 2.0, 4.0 / 3.0, 3.0]);
}

#[test]
fn expansion_average_uses_trailing_window() {
    let dates: Vec<_> = (1..=4).map(|i| d(&format!("2020-03-0{i}"))).collect();
    let e = expand_daily(&dates, &[2, 4, 6, 8], 2);
    assert_eq!(e.averages, vec![2.0, 3.0, 5.0, 7.0]);

    let e0 = expand_daily(&dates, &[2, 4, 6, 8], 0);
    assert_eq!(e0.averages, vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn empty_expansion() {
    assert!(expand_daily(&[], &[], 7).is_empty());
}

#[test]
fn trim_leading_zeros_keeps_inner_zeros() {
    let dates: Vec<_> = (1..=5).map(|i| d(&format!("2020-03-0{i}"))).collect();
    let e = expand_daily(&dates, &[0, 0, 3, 0, 1], 7).trim_leading_zeros();
    assert_eq!(e.dates.first(), Some(&d("2020-03-03")));
    assert_eq!(e.values, vec![3, 0, 1]);
    assert_eq!(e.averages.len(), 3);

    let all_zero = expand_daily(&dates, &[0; 5], 7).trim_leading_zeros();
    assert!(all_zero.is_empty());
}

#[test]
fn series_expansions_line_up_with_deltas() {
    let log = vec![
        entry("2020-03-01", [2, 0, 0, 0]),
        entry("2020-03-03", [5, 1, 1, 0]),
    ];
    let s = build(log, &BTreeSet::new()).unwrap();
    assert_eq!(s.new_cases_daily(7).values, vec![2, 0, 5]);
    assert_eq!(s.new_cured_daily(7).values, vec![0, 0, 1]);
    let deaths = s.new_deaths_daily(7);
    assert_eq!(deaths.dates, vec![d("2020-03-03")]);
    assert_eq!(deaths.values, vec![1]);
}

#[test]
fn pressure_percent_against_previous_day_active() {
    let dates = [d("2020-03-01"), d("2020-03-02"), d("2020-03-03")];
    let p = active_pressure(&dates, &[100, 10, 22], &[100, 100, 110], 7);
    assert_eq!(p.dates.len(), 3);
    assert_eq!(
        p.new_case_percents,
        vec![Metric::Undefined, Metric::Value(10.0), Metric::Value(22.0)]
    );
    // Any undefined percent in the window leaves the average undefined.
    assert!(p.average_percents.iter().all(|m| m.is_undefined()));
}

#[test]
fn pressure_carries_active_across_gaps() {
    let dates = [d("2020-03-01"), d("2020-03-03")];
    let p = active_pressure(&dates, &[50, 5], &[50, 40], 7);
    // 2020-03-02 is missing: no new cases, active carried from 2020-03-01.
    assert_eq!(p.new_case_percents[1], Metric::Value(0.0));
    assert_eq!(p.new_case_percents[2], Metric::Value(10.0));
}

#[test]
fn pressure_geometric_average_and_cagr() {
    let dates = [d("2020-03-01"), d("2020-03-02"), d("2020-03-03")];
    let p = active_pressure(&dates, &[0, 0, 0], &[100, 100, 400], 2);
    // No new cases after day 0: every defined percent is 0, so is their mean.
    assert_eq!(p.average_percents[2], Metric::Value(0.0));
    // Active went 100 -> 400 over two days: doubled per day.
    let cagr = p.active_cagrs[2].value().unwrap();
    assert!((cagr - 100.0).abs() < 1e-9);
    assert_eq!(p.active_cagrs[1], Metric::Undefined);
}
