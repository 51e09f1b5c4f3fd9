use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::external::llm_provider::CompletionProvider;
use crate::models::{GeneratePortfolioRequest, GeneratedPortfolio, NormalizationNotice};
use crate::services::{allocation_service, simulation_service};

/// Run one generation request end to end: validate the form input, ask the
/// model for a portfolio, normalize what comes back, and attach the
/// simulated comparison series.
pub async fn generate_portfolio(
    completions: Arc<dyn CompletionProvider>,
    request: GeneratePortfolioRequest,
) -> Result<GeneratedPortfolio, AppError> {
    request.validate()?;

    let today = Local::now().date_naive();
    let days = request.timeframe.num_days(today, request.custom_start_date);

    let prompt = build_portfolio_prompt(&request.investment_thesis);
    info!(
        "Generating portfolio (thesis: {} chars, timeframe: {:?})",
        request.investment_thesis.len(),
        request.timeframe
    );

    let content = completions.complete(&request.openai_api_key, &prompt).await?;

    let validated = allocation_service::parse_and_normalize(&content)?;
    if validated.adjusted {
        warn!(
            "Total allocation was {:.2}%, rescaled to 100%",
            validated.raw_total
        );
    }

    let performance = simulation_service::simulate_performance(today, days);

    Ok(GeneratedPortfolio {
        overall_justification: validated.response.overall_justification,
        portfolio: validated.response.portfolio,
        normalization: NormalizationNotice {
            adjusted: validated.adjusted,
            raw_total: validated.raw_total,
        },
        performance,
    })
}

/// Prompt template for portfolio generation. The thesis is embedded
/// verbatim; the reply contract (two top-level keys, four fields per asset)
/// is what the validator enforces on the way back.
fn build_portfolio_prompt(thesis: &str) -> String {
    format!(
        r#"Please respond with a json object only. Do not include any introductory or concluding text, just the raw json. You are a financial advisor. Based on the following investment thesis, generate a diversified investment portfolio suitable for a starting capital of $10,000.
The portfolio should consist of 10-15 assets, with approximately 70% allocation to ETFs and 30% to individual stocks or bonds.
For each asset, provide its ticker symbol, a proposed percentage allocation (summing to 100%), and a brief justification for its inclusion based on the investment thesis.
Additionally, provide an overall justification for the portfolio strategy.
The json object should have two top-level keys: 'portfolio' (an array of asset objects) and 'overallJustification' (a string).
Each asset object in the 'portfolio' array should have 'symbol' (string), 'name' (string), 'allocation' (number), and 'justification' (string).

Investment Thesis: "{}""#,
        thesis
    )
}
