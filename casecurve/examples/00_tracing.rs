mod common;

use casecurve::CaseCurve;
use chrono::NaiveDate;
use common::SAMPLE_LOG;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug,casecurve_core=trace (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let curve = CaseCurve::builder()
        .exclude_date(NaiveDate::from_ymd_opt(2020, 3, 3).ok_or("bad date")?)
        .build()?;
    let series = curve.load_series(SAMPLE_LOG)?;

    tracing::info!(days = series.len(), "series ready");
    Ok(())
}
