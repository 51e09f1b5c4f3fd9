use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Performance view ranges offered by the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "MTD")]
    MonthToDate,
    #[serde(rename = "QTD")]
    QuarterToDate,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "SINCE_CUSTOM_DATE")]
    SinceCustomDate,
}

impl Timeframe {
    /// Number of days of history to simulate, counted back from `today`.
    ///
    /// Date-anchored ranges can compute to zero (e.g. MTD on the 1st); the
    /// result is clamped so the chart always has at least one point.
    pub fn num_days(&self, today: NaiveDate, custom_start: Option<NaiveDate>) -> i64 {
        let days = match self {
            Timeframe::MonthToDate => {
                let month_start = today.with_day(1).unwrap_or(today);
                (today - month_start).num_days()
            }
            Timeframe::QuarterToDate => {
                let quarter_month = 3 * ((today.month() - 1) / 3) + 1;
                let quarter_start = NaiveDate::from_ymd_opt(today.year(), quarter_month, 1)
                    .unwrap_or(today);
                (today - quarter_start).num_days()
            }
            Timeframe::YearToDate => {
                let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                (today - year_start).num_days()
            }
            Timeframe::OneYear => 365,
            Timeframe::FiveYears => 365 * 5,
            Timeframe::SinceCustomDate => match custom_start {
                Some(start) => (today - start).num_days(),
                None => 365,
            },
        };
        days.max(1)
    }
}

/// A single portfolio-generation request as submitted by the form.
///
/// Both credentials are opaque pass-throughs: the OpenAI key authenticates
/// the completion call, the FMP key is collected by the form but consumed by
/// nothing on this backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePortfolioRequest {
    pub investment_thesis: String,
    pub openai_api_key: String,
    pub fmp_api_key: String,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub custom_start_date: Option<NaiveDate>,
}

impl GeneratePortfolioRequest {
    /// Reject the request before any outbound call is attempted.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.investment_thesis.trim().is_empty() {
            return Err(AppError::MissingInput("investment thesis".into()));
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(AppError::MissingInput("OpenAI API key".into()));
        }
        if self.fmp_api_key.trim().is_empty() {
            return Err(AppError::MissingInput("FMP API key".into()));
        }
        if self.timeframe == Timeframe::SinceCustomDate && self.custom_start_date.is_none() {
            return Err(AppError::MissingInput("custom start date".into()));
        }
        Ok(())
    }
}
