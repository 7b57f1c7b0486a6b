mod common;

use casecurve::{CaseCurve, Metric};
use common::SAMPLE_LOG;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let curve = CaseCurve::builder().build()?;
    let series = curve.load_series(SAMPLE_LOG)?;

    for i in 0..series.len() {
        let growth = match series.total_growths[i].growth_percent() {
            Metric::Value(p) => format!("{p:+6.1}%"),
            Metric::Undefined => "     -".to_string(),
        };
        let doubling = match series.doubling_times[i] {
            Metric::Value(d) => format!("{d:4.1} d"),
            Metric::Undefined => "   - ".to_string(),
        };
        println!(
            "{} {:6} {:+6} ({growth}) ({doubling})",
            series.dates[i], series.total[i], series.total_deltas[i]
        );
    }
    Ok(())
}
