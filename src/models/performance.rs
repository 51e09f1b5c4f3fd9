use chrono::NaiveDate;
use serde::Serialize;

/// One day of the simulated comparison chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub portfolio: f64,
    pub benchmark: f64,
}

/// Synthetic daily value series for "Portfolio" vs. a benchmark index.
///
/// Decorative random-walk data only. It is not derived from the generated
/// portfolio and must not be read as a projection.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedSeries {
    pub benchmark_label: String,
    pub points: Vec<PerformancePoint>,
}
