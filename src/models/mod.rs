mod performance;
mod portfolio;
mod thesis;

pub use performance::{PerformancePoint, SimulatedSeries};
pub use portfolio::{AssetAllocation, GeneratedPortfolio, NormalizationNotice, PortfolioResponse};
pub use thesis::{GeneratePortfolioRequest, Timeframe};
