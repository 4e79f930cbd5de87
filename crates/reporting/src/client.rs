//! Report download clients.
//! The HTTP client posts an AWQL query to the platform's report download
//! service and returns the body untouched.

use std::time::{Duration, Instant};

use adwords_core::config::ApiConfig;
use adwords_core::{AdwordsError, AdwordsResult, AdwordsSession};
use tracing::{debug, warn};

use crate::query::ReportQuery;

/// Anything that can turn a report query into raw report text.
pub trait ReportDownloader {
    fn download(&self, query: &ReportQuery) -> AdwordsResult<String>;
}

pub struct HttpReportDownloader {
    client: reqwest::blocking::Client,
    url: String,
    session: AdwordsSession,
}

impl HttpReportDownloader {
    pub fn new(api: &ApiConfig, session: AdwordsSession) -> AdwordsResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(api.timeout_ms))
            .user_agent(api.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: api.report_download_url(),
            session,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReportDownloader for HttpReportDownloader {
    fn download(&self, query: &ReportQuery) -> AdwordsResult<String> {
        let start = Instant::now();
        debug!(
            report_type = %query.report_type(),
            client_customer_id = self.session.client_customer_id(),
            awql = query.awql(),
            "Requesting report download"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.session.access_token())
            .header("developerToken", self.session.developer_token())
            .header("clientCustomerId", self.session.client_customer_id())
            .header("skipReportHeader", "true")
            .header("skipColumnHeader", "false")
            .header(
                "skipReportSummary",
                query.skip_report_summary().to_string(),
            )
            .header(
                "includeZeroImpressions",
                query.include_zero_impressions().to_string(),
            )
            .form(&[("__rdquery", query.awql()), ("__fmt", query.format().as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!(
                report_type = %query.report_type(),
                status = status.as_u16(),
                "Report download rejected"
            );
            return Err(AdwordsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            report_type = %query.report_type(),
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Report download complete"
        );
        Ok(body)
    }
}
