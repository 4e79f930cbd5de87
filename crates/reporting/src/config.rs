//! Report configuration — date range, selected columns and filters.

use adwords_core::types::DownloadFormat;
use adwords_core::{dates, AdwordsResult, EntityConfig, Predicate, Selection};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverrides {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub fields: Option<Vec<String>>,
    pub predicates: Option<Vec<Predicate>>,
    pub format: Option<DownloadFormat>,
    pub include_zero_impressions: Option<bool>,
    pub skip_report_summary: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    selection: Selection,
    start_date: String,
    end_date: String,
    format: DownloadFormat,
    include_zero_impressions: bool,
    skip_report_summary: bool,
}

impl ReportConfig {
    pub fn new(overrides: ReportOverrides) -> AdwordsResult<Self> {
        let today = dates::today();
        let mut config = Self {
            selection: Selection::default(),
            start_date: today.clone(),
            end_date: today,
            format: DownloadFormat::Csv,
            include_zero_impressions: false,
            skip_report_summary: true,
        };

        if let Some(date) = overrides.start_date {
            config.start_date = dates::normalize(&date)?;
        }
        if let Some(date) = overrides.end_date {
            config.end_date = dates::normalize(&date)?;
        }
        if let Some(fields) = overrides.fields {
            config.selection.set_fields(fields);
        }
        if let Some(predicates) = overrides.predicates {
            config.selection.set_predicates(predicates);
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if let Some(v) = overrides.include_zero_impressions {
            config.include_zero_impressions = v;
        }
        if let Some(v) = overrides.skip_report_summary {
            config.skip_report_summary = v;
        }
        Ok(config)
    }

    pub fn from_value(value: serde_json::Value) -> AdwordsResult<Self> {
        let overrides: ReportOverrides = serde_json::from_value(value)?;
        Self::new(overrides)
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.start_date = date.into();
        self
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.end_date = date.into();
        self
    }

    pub fn set_fields(&mut self, fields: Vec<String>) -> &mut Self {
        self.selection.set_fields(fields);
        self
    }

    pub fn format(&self) -> DownloadFormat {
        self.format
    }

    pub fn set_format(&mut self, format: DownloadFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn include_zero_impressions(&self) -> bool {
        self.include_zero_impressions
    }

    pub fn set_include_zero_impressions(&mut self, value: bool) -> &mut Self {
        self.include_zero_impressions = value;
        self
    }

    /// When false the platform appends a `Total` summary row, which
    /// formatting then drops.
    pub fn skip_report_summary(&self) -> bool {
        self.skip_report_summary
    }

    pub fn set_skip_report_summary(&mut self, value: bool) -> &mut Self {
        self.skip_report_summary = value;
        self
    }
}

impl EntityConfig for ReportConfig {
    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
