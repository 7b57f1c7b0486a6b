use chrono::NaiveDateTime;

use crate::Metric;

const SECONDS_PER_DAY: f64 = 86_400.0;

// `count <= n3 / 2` without rounding or overflow.
fn at_or_below_half(count: u64, n3: u64) -> bool {
    u128::from(count) * 2 <= u128::from(n3)
}

/// Latest day `k` in `floor..=i` whose total is at most half of `totals[i]`.
fn lower_bracket(totals: &[u64], i: usize, floor: usize) -> Option<usize> {
    let n3 = totals[i];
    (floor..=i).rev().find(|&k| at_or_below_half(totals[k], n3))
}

/// Interpolate the crossing of `n3 / 2` between day `j` and day `j + 1`, then
/// measure from that moment to day `i`.
///
/// `j == i` means day `i` itself is at or below half of its own total (a zero
/// total), so no later sample brackets the crossing.
fn interpolate(totals: &[u64], stamps: &[NaiveDateTime], i: usize, j: usize) -> Metric {
    if j >= i {
        return Metric::Undefined;
    }
    let (n1, t1) = (totals[j] as f64, stamps[j]);
    let (n2, t2) = (totals[j + 1] as f64, stamps[j + 1]);
    let (n3, t3) = (totals[i] as f64, stamps[i]);
    let half = n3 / 2.0;

    let tail = (t3 - t2).num_seconds() as f64;
    let span = (t2 - t1).num_seconds() as f64;
    let seconds = tail + span * (n2 - half) / (n2 - n1);
    Metric::Value(seconds / SECONDS_PER_DAY)
}

/// Doubling time of the total-cases series on day `i`, in fractional days.
///
/// Walks backward from day `i` to the most recent day whose total is at most
/// half of day `i`'s total, and linearly interpolates in time between that day
/// and the one after it. Undefined on day 0, when no such day exists, or when
/// `i` is out of range.
///
/// `totals` and `stamps` are index-aligned; `stamps` are the days' resolved
/// last-reference timestamps.
#[must_use]
pub fn doubling_time_at(totals: &[u64], stamps: &[NaiveDateTime], i: usize) -> Metric {
    if i == 0 || i >= totals.len() || i >= stamps.len() {
        return Metric::Undefined;
    }
    lower_bracket(totals, i, 0).map_or(Metric::Undefined, |j| interpolate(totals, stamps, i, j))
}

/// Doubling time for every day of the series.
///
/// Equivalent to calling [`doubling_time_at`] for each index. When a day's
/// total does not drop below the previous day's, the previous bracket is still
/// a valid candidate, so the backward walk stops there instead of at day 0.
#[must_use]
pub fn doubling_times(totals: &[u64], stamps: &[NaiveDateTime]) -> Vec<Metric> {
    let n = totals.len().min(stamps.len());
    let mut out = Vec::with_capacity(n);
    let mut carried: Option<usize> = None;

    for i in 0..n {
        let lower = match carried {
            Some(j) if i > 0 && totals[i] >= totals[i - 1] => {
                lower_bracket(totals, i, j + 1).or(Some(j))
            }
            _ => lower_bracket(totals, i, 0),
        };
        out.push(match lower {
            Some(j) if i > 0 => interpolate(totals, stamps, i, j),
            _ => Metric::Undefined,
        });
        carried = lower;
    }
    out
}
