//! Date handling for report ranges and campaign schedules.
//!
//! The platform expects dates as `YYYYMMDD`; callers may pass the more
//! common dashed or slashed forms.

use chrono::{Local, NaiveDate};

use crate::error::{AdwordsError, AdwordsResult};

const ACCEPTED_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parse a caller-supplied date and return it in `YYYYMMDD` form.
pub fn normalize(input: &str) -> AdwordsResult<String> {
    parse(input).map(|d| compact(&d))
}

pub fn parse(input: &str) -> AdwordsResult<NaiveDate> {
    let trimmed = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AdwordsError::InvalidDate(input.to_string()))
}

pub fn compact(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Today's date in the local timezone, `YYYYMMDD`.
pub fn today() -> String {
    compact(&Local::now().date_naive())
}
