//! AWQL query construction for report downloads.

use adwords_core::types::{DownloadFormat, ReportType};
use adwords_core::{AdwordsError, AdwordsResult, EntityConfig};

use crate::config::ReportConfig;

/// A fully rendered report request: AWQL text plus download options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    report_type: ReportType,
    awql: String,
    format: DownloadFormat,
    include_zero_impressions: bool,
    skip_report_summary: bool,
}

impl ReportQuery {
    /// `SELECT <fields> FROM <REPORT_TYPE> [WHERE ..] DURING <start>,<end>`
    pub fn build(report_type: ReportType, config: &ReportConfig) -> AdwordsResult<Self> {
        if config.fields().is_empty() {
            return Err(AdwordsError::config(format!(
                "{report_type} requires at least one field"
            )));
        }

        let mut awql = format!("SELECT {} FROM {}", config.fields().join(","), report_type);

        let conditions: Vec<String> = config.predicates().iter().map(|p| p.to_awql()).collect();
        if !conditions.is_empty() {
            awql.push_str(" WHERE ");
            awql.push_str(&conditions.join(" AND "));
        }

        awql.push_str(&format!(
            " DURING {},{}",
            config.start_date(),
            config.end_date()
        ));

        Ok(Self {
            report_type,
            awql,
            format: config.format(),
            include_zero_impressions: config.include_zero_impressions(),
            skip_report_summary: config.skip_report_summary(),
        })
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn awql(&self) -> &str {
        &self.awql
    }

    pub fn format(&self) -> DownloadFormat {
        self.format
    }

    pub fn include_zero_impressions(&self) -> bool {
        self.include_zero_impressions
    }

    pub fn skip_report_summary(&self) -> bool {
        self.skip_report_summary
    }
}
