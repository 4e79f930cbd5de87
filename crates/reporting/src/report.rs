//! Downloadable reports.
//!
//! A report is bound to a [`ReportConfig`] and moves through three states:
//! constructed, downloaded (raw text stored) and formatted (records parsed
//! from the raw text). Formatting can be repeated; it always reparses the
//! stored raw payload.

use std::collections::{BTreeMap, HashSet};
use std::marker::PhantomData;

use adwords_core::types::{DownloadFormat, ReportType};
use adwords_core::{AdwordsError, AdwordsResult, EntityConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::client::ReportDownloader;
use crate::config::ReportConfig;
use crate::csv;
use crate::query::ReportQuery;

/// One formatted report row, keyed by column.
pub type ReportRecord = BTreeMap<String, String>;

/// Selects which canned report a [`Report`] requests.
pub trait ReportKind {
    const REPORT_TYPE: ReportType;
}

#[derive(Debug, Clone, Copy)]
pub struct AdGroupPerformance;

impl ReportKind for AdGroupPerformance {
    const REPORT_TYPE: ReportType = ReportType::AdGroupPerformanceReport;
}

#[derive(Debug, Clone, Copy)]
pub struct FinalUrl;

impl ReportKind for FinalUrl {
    const REPORT_TYPE: ReportType = ReportType::FinalUrlReport;
}

pub type AdGroupPerformanceReport = Report<AdGroupPerformance>;
pub type FinalUrlReport = Report<FinalUrl>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportState {
    Constructed,
    Downloaded,
    Formatted,
}

#[derive(Debug, Clone)]
pub struct Report<K: ReportKind> {
    config: ReportConfig,
    raw: Option<String>,
    records: Option<Vec<ReportRecord>>,
    _kind: PhantomData<K>,
}

impl<K: ReportKind> Report<K> {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            raw: None,
            records: None,
            _kind: PhantomData,
        }
    }

    pub fn report_type(&self) -> ReportType {
        K::REPORT_TYPE
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn state(&self) -> ReportState {
        match (&self.raw, &self.records) {
            (_, Some(_)) => ReportState::Formatted,
            (Some(_), None) => ReportState::Downloaded,
            (None, None) => ReportState::Constructed,
        }
    }

    /// Fetch the raw report and store it. Any previously formatted records
    /// are discarded.
    pub fn download(&mut self, downloader: &dyn ReportDownloader) -> AdwordsResult<&mut Self> {
        let query = ReportQuery::build(K::REPORT_TYPE, &self.config)?;
        let report_type = K::REPORT_TYPE.as_str();

        metrics::counter!("report.downloads", "report_type" => report_type).increment(1);

        let raw = downloader.download(&query).inspect_err(|e| {
            warn!(report_type, error = %e, "Report download failed");
            metrics::counter!("report.download_errors", "report_type" => report_type).increment(1);
        })?;

        info!(report_type, bytes = raw.len(), "Report downloaded");
        self.raw = Some(raw);
        self.records = None;
        Ok(self)
    }

    /// Parse the stored raw report into records.
    pub fn format(&mut self) -> AdwordsResult<&mut Self> {
        let raw = self.raw.as_deref().ok_or(AdwordsError::NotDownloaded)?;
        let records = format_raw(
            raw,
            self.config.format(),
            self.config.fields(),
            !self.config.skip_report_summary(),
        )?;

        let report_type = K::REPORT_TYPE.as_str();
        metrics::counter!("report.rows", "report_type" => report_type)
            .increment(records.len() as u64);
        info!(report_type, rows = records.len(), "Report formatted");

        self.records = Some(records);
        Ok(self)
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn records(&self) -> Option<&[ReportRecord]> {
        self.records.as_deref()
    }

    pub fn to_json(&self) -> AdwordsResult<String> {
        let records = self.records.as_ref().ok_or(AdwordsError::NotDownloaded)?;
        Ok(serde_json::to_string_pretty(records)?)
    }
}

/// Turn raw report text into records.
///
/// The first row is the column header, unless it is a single-cell report
/// title sitting above a wider table. When `summary_included` is set the
/// trailing `Total` row is the platform's summary and is dropped; otherwise
/// every row is data. Records are keyed by the requested field names when
/// their count matches the header width, by the header cells otherwise, and
/// the keys must be distinct.
pub fn format_raw(
    raw: &str,
    format: DownloadFormat,
    fields: &[String],
    summary_included: bool,
) -> AdwordsResult<Vec<ReportRecord>> {
    let delimiter = match format {
        DownloadFormat::Csv => ',',
        DownloadFormat::Tsv => '\t',
    };
    let mut rows = csv::parse_rows(raw, delimiter)?;

    if rows.len() > 1 && rows[0].cells.len() == 1 && rows[1].cells.len() > 1 {
        rows.remove(0);
    }
    if summary_included
        && rows.len() > 1
        && rows
            .last()
            .and_then(|r| r.cells.first())
            .is_some_and(|c| c.trim() == "Total")
    {
        rows.pop();
    }

    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let keys: Vec<String> = if fields.len() == header.cells.len() {
        if let Some(dup) = first_duplicate(fields) {
            return Err(AdwordsError::config(format!(
                "field '{dup}' is requested more than once"
            )));
        }
        fields.to_vec()
    } else {
        let names: Vec<String> = header.cells.iter().map(|h| h.trim().to_string()).collect();
        if let Some(dup) = first_duplicate(&names) {
            return Err(AdwordsError::Csv {
                line: header.line,
                message: format!("duplicate column '{dup}' in header"),
            });
        }
        names
    };

    rows.map(|row| {
        if row.cells.len() != keys.len() {
            return Err(AdwordsError::Csv {
                line: row.line,
                message: format!("expected {} cells, found {}", keys.len(), row.cells.len()),
            });
        }
        Ok(keys.iter().cloned().zip(row.cells).collect())
    })
    .collect()
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(String::as_str)
        .find(|name| !seen.insert(*name))
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportOverrides;
    use std::cell::RefCell;

    const AD_GROUP_FIXTURE: &str = "\
Ad group ID,Ad group,Clicks,Impressions,Cost
1001,Boots - exact,12,340,15230000
1002,\"Boots, broad\",3,129,2010000
Total,--,15,469,17240000
";

    struct FixtureDownloader {
        body: &'static str,
        queries: RefCell<Vec<String>>,
    }

    impl FixtureDownloader {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl ReportDownloader for FixtureDownloader {
        fn download(&self, query: &ReportQuery) -> AdwordsResult<String> {
            self.queries.borrow_mut().push(query.awql().to_string());
            Ok(self.body.to_string())
        }
    }

    struct FailingDownloader;

    impl ReportDownloader for FailingDownloader {
        fn download(&self, _query: &ReportQuery) -> AdwordsResult<String> {
            Err(AdwordsError::Api {
                status: 400,
                body: "QueryError.INVALID_FIELD".into(),
            })
        }
    }

    fn ad_group_config() -> ReportConfig {
        ReportConfig::new(ReportOverrides {
            start_date: Some("2016-11-01".into()),
            end_date: Some("2016-11-02".into()),
            fields: Some(
                ["AdGroupId", "AdGroupName", "Clicks", "Impressions", "Cost"]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            ),
            skip_report_summary: Some(false),
            ..ReportOverrides::default()
        })
        .unwrap()
    }

    #[test]
    fn test_download_then_format() {
        let downloader = FixtureDownloader::new(AD_GROUP_FIXTURE);
        let mut report = AdGroupPerformanceReport::new(ad_group_config());
        assert_eq!(report.state(), ReportState::Constructed);

        report.download(&downloader).unwrap().format().unwrap();
        assert_eq!(report.state(), ReportState::Formatted);

        let records = report.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["AdGroupId"], "1001");
        assert_eq!(records[0]["Clicks"], "12");
        assert_eq!(records[1]["AdGroupName"], "Boots, broad");
        assert_eq!(records[1]["Cost"], "2010000");

        let queries = downloader.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].contains("FROM ADGROUP_PERFORMANCE_REPORT"));
        assert!(queries[0].ends_with("DURING 20161101,20161102"));
    }

    #[test]
    fn test_format_is_repeatable() {
        let downloader = FixtureDownloader::new(AD_GROUP_FIXTURE);
        let mut report = AdGroupPerformanceReport::new(ad_group_config());
        report.download(&downloader).unwrap();

        let first = report.format().unwrap().records().unwrap().to_vec();
        let second = report.format().unwrap().records().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_before_download_is_an_error() {
        let mut report = FinalUrlReport::new(ad_group_config());
        assert!(matches!(report.format(), Err(AdwordsError::NotDownloaded)));
        assert!(report.to_json().is_err());
    }

    #[test]
    fn test_failed_download_keeps_state() {
        let mut report = FinalUrlReport::new(ad_group_config());
        let err = report.download(&FailingDownloader).unwrap_err();
        assert!(matches!(err, AdwordsError::Api { status: 400, .. }));
        assert_eq!(report.state(), ReportState::Constructed);
    }

    #[test]
    fn test_redownload_discards_records() {
        let downloader = FixtureDownloader::new(AD_GROUP_FIXTURE);
        let mut report = AdGroupPerformanceReport::new(ad_group_config());
        report.download(&downloader).unwrap().format().unwrap();
        report.download(&downloader).unwrap();
        assert_eq!(report.state(), ReportState::Downloaded);
        assert!(report.records().is_none());
    }

    #[test]
    fn test_report_type_constants() {
        let a = AdGroupPerformanceReport::new(ad_group_config());
        let b = FinalUrlReport::new(ad_group_config());
        assert_eq!(a.report_type(), ReportType::AdGroupPerformanceReport);
        assert_eq!(b.report_type(), ReportType::FinalUrlReport);
    }

    #[test]
    fn test_format_raw_falls_back_to_header_names() {
        let records = format_raw(
            "Final URL,Clicks\nhttp://a.com,4\n",
            DownloadFormat::Csv,
            &[],
            false,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Final URL"], "http://a.com");
    }

    #[test]
    fn test_format_raw_skips_title_row() {
        let raw = "\"FINAL_URL_REPORT (Nov 1, 2016-Nov 2, 2016)\"\nFinal URL,Clicks\nhttp://a.com,4\n";
        let records = format_raw(raw, DownloadFormat::Csv, &[], false).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Clicks"], "4");
    }

    #[test]
    fn test_format_raw_header_only_and_empty() {
        assert!(format_raw("", DownloadFormat::Csv, &[], false).unwrap().is_empty());
        assert!(format_raw("A,B\n", DownloadFormat::Csv, &[], false).unwrap().is_empty());
    }

    #[test]
    fn test_format_raw_rejects_ragged_rows() {
        let err = format_raw("A,B\n\n1,\"two\nlines\"\n3\n", DownloadFormat::Csv, &[], false)
            .unwrap_err();
        match err {
            AdwordsError::Csv { line, .. } => assert_eq!(line, 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_raw_tsv() {
        let records = format_raw(
            "Final URL\tClicks\nhttp://a.com\t9\n",
            DownloadFormat::Tsv,
            &["EffectiveFinalUrl".into(), "Clicks".into()],
            false,
        )
        .unwrap();
        assert_eq!(records[0]["EffectiveFinalUrl"], "http://a.com");
    }

    #[test]
    fn test_to_json_exports_records() {
        let downloader = FixtureDownloader::new(AD_GROUP_FIXTURE);
        let mut report = AdGroupPerformanceReport::new(ad_group_config());
        report.download(&downloader).unwrap().format().unwrap();
        let parsed: Vec<ReportRecord> = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["Impressions"], "340");
    }

    #[test]
    fn test_format_raw_keeps_quoted_empty_cells() {
        let records = format_raw(
            "Labels\n\"\"\nfoo\n\"\"\n",
            DownloadFormat::Csv,
            &["Labels".into()],
            false,
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["Labels"], "");
        assert_eq!(records[1]["Labels"], "foo");
        assert_eq!(records[2]["Labels"], "");
    }

    #[test]
    fn test_format_raw_rejects_duplicate_fields() {
        let err = format_raw(
            "Clicks,Clicks\n1,2\n",
            DownloadFormat::Csv,
            &["Clicks".into(), "Clicks".into()],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, AdwordsError::Config(_)));
    }

    #[test]
    fn test_format_raw_rejects_duplicate_header_columns() {
        let err = format_raw("\nClicks, Clicks\n1,2\n", DownloadFormat::Csv, &[], false)
            .unwrap_err();
        match err {
            AdwordsError::Csv { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("Clicks"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_total_row_kept_unless_summary_requested() {
        let raw = "Ad group,Clicks\nBoots,1\nTotal,5\n";
        let data = format_raw(raw, DownloadFormat::Csv, &[], false).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1]["Ad group"], "Total");

        let summarized = format_raw(raw, DownloadFormat::Csv, &[], true).unwrap();
        assert_eq!(summarized.len(), 1);
    }

    #[test]
    fn test_default_config_keeps_total_row() {
        let downloader = FixtureDownloader::new("Ad group,Clicks\nBoots,1\nTotal,5\n");
        let config = ReportConfig::new(ReportOverrides {
            fields: Some(vec!["AdGroupName".into(), "Clicks".into()]),
            ..ReportOverrides::default()
        })
        .unwrap();
        let mut report = AdGroupPerformanceReport::new(config);
        report.download(&downloader).unwrap().format().unwrap();
        assert_eq!(report.records().unwrap().len(), 2);
    }
}
