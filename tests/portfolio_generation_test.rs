/// Portfolio Generation Contract Tests
///
/// Tests for the generation endpoint's request/response contract:
/// - Request validation (POST /api/portfolios/generate)
/// - Model-reply shape requirements and the allocation rescale rule
/// - Timeframe day-count mapping for the simulated series
///
/// NOTE: These tests validate request/response structures and business logic.
/// End-to-end tests against a live completion provider require a running
/// server and a real API key.

// ---------------------------------------------------------------------------
// Request / Response Structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GenerateRequest {
    investment_thesis: String,
    openai_api_key: String,
    fmp_api_key: String,
    timeframe: String,
    custom_start_date: Option<(i32, u32, u32)>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            investment_thesis: "Dividend aristocrats with a bond sleeve".to_string(),
            openai_api_key: "sk-test".to_string(),
            fmp_api_key: "fmp-test".to_string(),
            timeframe: "1Y".to_string(),
            custom_start_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Allocation {
    symbol: String,
    allocation: f64,
}

// ---------------------------------------------------------------------------
// Request Validation Tests
// ---------------------------------------------------------------------------

fn validate_generate_request(req: &GenerateRequest) -> Result<(), String> {
    if req.investment_thesis.trim().is_empty() {
        return Err("investment thesis is required".to_string());
    }
    if req.openai_api_key.trim().is_empty() {
        return Err("OpenAI API key is required".to_string());
    }
    if req.fmp_api_key.trim().is_empty() {
        return Err("FMP API key is required".to_string());
    }
    if req.timeframe == "SINCE_CUSTOM_DATE" && req.custom_start_date.is_none() {
        return Err("custom start date is required".to_string());
    }
    Ok(())
}

#[test]
fn test_complete_request_is_valid() {
    assert!(validate_generate_request(&GenerateRequest::default()).is_ok());
}

#[test]
fn test_blank_thesis_is_rejected() {
    let req = GenerateRequest { investment_thesis: "  ".to_string(), ..Default::default() };
    assert!(validate_generate_request(&req).is_err());
}

#[test]
fn test_missing_credentials_are_rejected() {
    let req = GenerateRequest { openai_api_key: String::new(), ..Default::default() };
    assert!(validate_generate_request(&req).is_err());

    let req = GenerateRequest { fmp_api_key: String::new(), ..Default::default() };
    assert!(validate_generate_request(&req).is_err());
}

#[test]
fn test_custom_timeframe_requires_a_date() {
    let req = GenerateRequest {
        timeframe: "SINCE_CUSTOM_DATE".to_string(),
        custom_start_date: None,
        ..Default::default()
    };
    assert!(validate_generate_request(&req).is_err());

    let req = GenerateRequest {
        timeframe: "SINCE_CUSTOM_DATE".to_string(),
        custom_start_date: Some((2024, 1, 15)),
        ..Default::default()
    };
    assert!(validate_generate_request(&req).is_ok());
}

// ---------------------------------------------------------------------------
// Allocation Rescale Rule
// ---------------------------------------------------------------------------

const TOLERANCE: f64 = 0.1;

/// The rescale applied to a reply whose weights do not sum to 100.
fn rescale(allocations: &mut [Allocation]) -> Result<bool, String> {
    let total: f64 = allocations.iter().map(|a| a.allocation).sum();
    if total <= 0.0 {
        return Err(format!("allocations sum to {}", total));
    }
    if (total - 100.0).abs() <= TOLERANCE {
        return Ok(false);
    }
    for a in allocations.iter_mut() {
        a.allocation = a.allocation / total * 100.0;
    }
    Ok(true)
}

fn allocations(weights: &[f64]) -> Vec<Allocation> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| Allocation { symbol: format!("A{}", i), allocation: *w })
        .collect()
}

#[test]
fn test_overweight_reply_is_rescaled_proportionally() {
    let mut portfolio = allocations(&[60.0, 60.0]);
    let adjusted = rescale(&mut portfolio).unwrap();

    assert!(adjusted);
    assert_eq!(portfolio[0].allocation, 50.0);
    assert_eq!(portfolio[1].allocation, 50.0);
}

#[test]
fn test_total_within_tolerance_is_not_touched() {
    let mut portfolio = allocations(&[50.0, 50.05]);
    let adjusted = rescale(&mut portfolio).unwrap();

    assert!(!adjusted);
    assert_eq!(portfolio[1].allocation, 50.05);
}

#[test]
fn test_rescaled_total_is_one_hundred() {
    let mut portfolio = allocations(&[7.3, 11.9, 23.4, 41.0, 2.2]);
    rescale(&mut portfolio).unwrap();

    let total: f64 = portfolio.iter().map(|a| a.allocation).sum();
    assert!((total - 100.0).abs() < 1e-6);
}

#[test]
fn test_rescale_keeps_weight_ratios() {
    let mut portfolio = allocations(&[24.0, 8.0]);
    rescale(&mut portfolio).unwrap();
    assert!((portfolio[0].allocation / portfolio[1].allocation - 3.0).abs() < 1e-9);
}

#[test]
fn test_zero_total_is_an_error_not_a_division() {
    let mut portfolio = allocations(&[0.0, 0.0]);
    assert!(rescale(&mut portfolio).is_err());
}

#[test]
fn test_tolerance_boundary_is_inclusive() {
    // Exactly 100.1 sits on the boundary and is still accepted as-is.
    let mut portfolio = allocations(&[50.0, 50.1]);
    let adjusted = rescale(&mut portfolio).unwrap();
    assert!(!adjusted);
}

// ---------------------------------------------------------------------------
// Timeframe Day Counts
// ---------------------------------------------------------------------------

fn fixed_span_days(timeframe: &str) -> Option<i64> {
    match timeframe {
        "1Y" => Some(365),
        "5Y" => Some(365 * 5),
        _ => None,
    }
}

#[test]
fn test_fixed_timeframe_spans() {
    assert_eq!(fixed_span_days("1Y"), Some(365));
    assert_eq!(fixed_span_days("5Y"), Some(1825));
    assert_eq!(fixed_span_days("MTD"), None);
}

#[test]
fn test_date_anchored_spans_count_days_from_anchor() {
    // June 18th: MTD anchors at June 1st, QTD at April 1st, YTD at Jan 1st.
    let mtd = 18 - 1;
    let qtd = 30 + 31 + 18 - 1;
    let ytd = 31 + 29 + 31 + 30 + 31 + 18 - 1; // leap year

    assert_eq!(mtd, 17);
    assert_eq!(qtd, 78);
    assert_eq!(ytd, 169);
}
