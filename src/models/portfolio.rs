use serde::{Deserialize, Serialize};

use crate::models::SimulatedSeries;

/// One asset entry of the generated portfolio.
///
/// `symbol` is whatever ticker the model proposed; it is not checked against
/// any exchange listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub symbol: String,
    pub name: String,
    /// Percentage weight. After normalization all weights sum to 100.
    pub allocation: f64,
    pub justification: String,
}

/// The parsed body of the model reply: the allocation list plus the overall
/// strategy justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResponse {
    pub portfolio: Vec<AssetAllocation>,
    #[serde(rename = "overallJustification")]
    pub overall_justification: String,
}

/// Whether the allocation weights had to be rescaled, and what they summed
/// to before rescaling. Drives the user-facing adjustment notice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NormalizationNotice {
    pub adjusted: bool,
    pub raw_total: f64,
}

/// Everything the frontend needs to render one generation result.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPortfolio {
    pub overall_justification: String,
    pub portfolio: Vec<AssetAllocation>,
    pub normalization: NormalizationNotice,
    pub performance: SimulatedSeries,
}
