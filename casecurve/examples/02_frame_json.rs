mod common;

use casecurve::CaseCurve;
use common::SAMPLE_LOG;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Renderers consume the flat frame: parallel vectors, -1 for undefined.
    let curve = CaseCurve::builder().average_window(3).build()?;
    let report = curve.report(casecurve::parse_log(SAMPLE_LOG)?)?;

    println!("{}", serde_json::to_string_pretty(&report.series.to_frame())?);
    println!("new cases (3-day avg): {:?}", report.new_cases.averages);
    Ok(())
}
