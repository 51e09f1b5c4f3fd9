use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{GeneratePortfolioRequest, GeneratedPortfolio};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_portfolio))
}

/// POST /api/portfolios/generate
/// Turn an investment thesis into a normalized portfolio with a simulated
/// performance series.
#[axum::debug_handler]
pub async fn generate_portfolio(
    State(state): State<AppState>,
    Json(data): Json<GeneratePortfolioRequest>,
) -> Result<Json<GeneratedPortfolio>, AppError> {
    info!("POST /api/portfolios/generate - Generating portfolio from thesis");
    let generated =
        services::generation_service::generate_portfolio(state.completions.clone(), data)
            .await
            .map_err(|e| {
                error!("Failed to generate portfolio: {}", e);
                e
            })?;
    Ok(Json(generated))
}
