use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{AssetAllocation, PortfolioResponse};

/// Deviation from 100% (in percentage points) above which the weights are
/// rescaled. Totals inside this band are left untouched so already-valid
/// output picks up no floating-point drift.
pub const ALLOCATION_TOLERANCE: f64 = 0.1;

const ENTRY_FIELDS: [&str; 4] = ["symbol", "name", "allocation", "justification"];

/// A structurally valid portfolio with weights summing to 100.
#[derive(Debug, Clone)]
pub struct ValidatedPortfolio {
    pub response: PortfolioResponse,
    /// True when the weights were rescaled.
    pub adjusted: bool,
    /// What the model's weights summed to before rescaling.
    pub raw_total: f64,
}

/// Parse raw completion text into a portfolio and rescale its weights to sum
/// to 100.
///
/// Fails with `MalformedResponse` when the text is not one well-formed JSON
/// object (or its fields have unusable types, or the weights sum to zero or
/// less), and with `MissingField` when a required key is absent. Pure: no
/// I/O, no state.
pub fn parse_and_normalize(raw: &str) -> Result<ValidatedPortfolio, AppError> {
    let mut response = parse_response(raw)?;

    let raw_total: f64 = response.portfolio.iter().map(|a| a.allocation).sum();
    if raw_total <= 0.0 {
        return Err(malformed(
            format!("allocations sum to {}, expected a positive total", raw_total),
            raw,
        ));
    }

    let adjusted = (raw_total - 100.0).abs() > ALLOCATION_TOLERANCE;
    if adjusted {
        debug!("Rescaling allocations: raw total {:.4}%", raw_total);
        for asset in &mut response.portfolio {
            asset.allocation = asset.allocation / raw_total * 100.0;
        }
    }

    Ok(ValidatedPortfolio { response, adjusted, raw_total })
}

/// Strict shape check of the model reply. Field access goes through explicit
/// lookups so a missing key fails naming that key instead of surfacing as an
/// opaque deserialization error.
fn parse_response(raw: &str) -> Result<PortfolioResponse, AppError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| malformed(e.to_string(), raw))?;

    let object = value
        .as_object()
        .ok_or_else(|| malformed("top-level value is not an object".into(), raw))?;

    let overall_justification = match object.get("overallJustification") {
        None => return Err(AppError::MissingField("overallJustification")),
        Some(v) => v
            .as_str()
            .ok_or_else(|| malformed("`overallJustification` is not a string".into(), raw))?,
    };
    if overall_justification.is_empty() {
        return Err(malformed("`overallJustification` is empty".into(), raw));
    }

    let entries = match object.get("portfolio") {
        None => return Err(AppError::MissingField("portfolio")),
        Some(v) => v
            .as_array()
            .ok_or_else(|| malformed("`portfolio` is not an array".into(), raw))?,
    };

    let portfolio = entries
        .iter()
        .map(|entry| parse_entry(entry, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PortfolioResponse {
        portfolio,
        overall_justification: overall_justification.to_string(),
    })
}

fn parse_entry(entry: &Value, raw: &str) -> Result<AssetAllocation, AppError> {
    let object = entry
        .as_object()
        .ok_or_else(|| malformed("portfolio entry is not an object".into(), raw))?;

    for field in ENTRY_FIELDS {
        if !object.contains_key(field) {
            return Err(AppError::MissingField(field));
        }
    }

    let string_field = |field: &str| -> Result<String, AppError> {
        object[field]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| malformed(format!("`{}` is not a string", field), raw))
    };

    let allocation = object["allocation"]
        .as_f64()
        .ok_or_else(|| malformed("`allocation` is not a number".into(), raw))?;

    Ok(AssetAllocation {
        symbol: string_field("symbol")?,
        name: string_field("name")?,
        allocation,
        justification: string_field("justification")?,
    })
}

fn malformed(detail: String, raw: &str) -> AppError {
    AppError::MalformedResponse { detail, raw: raw.to_string() }
}
