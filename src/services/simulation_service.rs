use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::models::{PerformancePoint, SimulatedSeries};

/// Both walks start from a $10,000 notional.
pub const STARTING_VALUE: f64 = 10_000.0;
/// Daily step standard deviations, in dollars.
const PORTFOLIO_DAILY_SIGMA: f64 = 10.0;
const BENCHMARK_DAILY_SIGMA: f64 = 8.0;

const BENCHMARK_LABEL: &str = "SPY";

/// Generate the decorative "Portfolio vs. benchmark" comparison series:
/// two independent Gaussian random walks over `days` daily points ending at
/// `end`. The walks have no relationship to any actual portfolio.
pub fn simulate_performance(end: NaiveDate, days: i64) -> SimulatedSeries {
    let mut rng = rand::rng();
    simulate_performance_with(&mut rng, end, days)
}

fn simulate_performance_with<R: Rng>(rng: &mut R, end: NaiveDate, days: i64) -> SimulatedSeries {
    let days = days.max(1) as usize;
    debug!("Simulating {} days of performance history", days);

    let portfolio = random_walk(rng, days, PORTFOLIO_DAILY_SIGMA);
    let benchmark = random_walk(rng, days, BENCHMARK_DAILY_SIGMA);

    let start = end - Duration::days(days as i64 - 1);
    let points = (0..days)
        .map(|i| PerformancePoint {
            date: start + Duration::days(i as i64),
            portfolio: portfolio[i],
            benchmark: benchmark[i],
        })
        .collect();

    SimulatedSeries { benchmark_label: BENCHMARK_LABEL.to_string(), points }
}

fn random_walk<R: Rng>(rng: &mut R, days: usize, sigma: f64) -> Vec<f64> {
    let step = Normal::new(0.0, sigma).expect("finite positive std dev");
    let mut value = STARTING_VALUE;
    (0..days)
        .map(|_| {
            value += step.sample(rng);
            value
        })
        .collect()
}
