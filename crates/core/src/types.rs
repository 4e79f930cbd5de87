//! Platform enumerations used by configs and reports.
//!
//! Wire names follow the platform's SCREAMING_SNAKE_CASE constants.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvertisingChannelType {
    #[default]
    Search,
    Display,
    Shopping,
    MultiChannel,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Enabled,
    #[default]
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdGroupStatus {
    #[default]
    Enabled,
    Paused,
    Removed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiddingStrategyType {
    #[default]
    ManualCpc,
    ManualCpm,
    PageOnePromoted,
    TargetSpend,
    TargetCpa,
    TargetRoas,
    MaximizeConversions,
    TargetOutrankShare,
    EnhancedCpc,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetDeliveryMethod {
    #[default]
    Standard,
    Accelerated,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdServingOptimizationStatus {
    Optimize,
    ConversionOptimize,
    Rotate,
    RotateIndefinitely,
    Unavailable,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServingStatus {
    #[default]
    Serving,
    None,
    Ended,
    Pending,
    Suspended,
}

/// Canned reports the platform can generate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    #[serde(rename = "ADGROUP_PERFORMANCE_REPORT")]
    AdGroupPerformanceReport,
    FinalUrlReport,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::AdGroupPerformanceReport => "ADGROUP_PERFORMANCE_REPORT",
            ReportType::FinalUrlReport => "FINAL_URL_REPORT",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DownloadFormat {
    #[default]
    Csv,
    Tsv,
}

impl DownloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadFormat::Csv => "CSV",
            DownloadFormat::Tsv => "TSV",
        }
    }
}
