//! Report configuration, AWQL query building, download and formatting for
//! the platform's canned reports.

pub mod client;
pub mod config;
pub mod csv;
pub mod query;
pub mod report;

pub use client::{HttpReportDownloader, ReportDownloader};
pub use config::{ReportConfig, ReportOverrides};
pub use query::ReportQuery;
pub use report::{
    AdGroupPerformanceReport, FinalUrlReport, Report, ReportKind, ReportRecord, ReportState,
};
