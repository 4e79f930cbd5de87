//! adwords-kit — download and format canned advertising reports, and preview
//! the selectors produced by campaign and ad group configs.

use adwords_campaigns::{AdGroupConfig, CampaignConfig};
use adwords_core::config::AppConfig;
use adwords_core::types::DownloadFormat;
use adwords_core::{AdwordsSession, EntityConfig, Predicate};
use adwords_reporting::{
    AdGroupPerformanceReport, FinalUrlReport, HttpReportDownloader, Report, ReportConfig,
    ReportDownloader, ReportKind, ReportOverrides,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "adwords-kit")]
#[command(about = "Advertising report download and config helper")]
#[command(version)]
struct Cli {
    /// Developer token (overrides config)
    #[arg(long, env = "ADWORDS_KIT__SESSION__DEVELOPER_TOKEN", global = true)]
    developer_token: Option<String>,

    /// Client customer id, e.g. 123-456-7890 (overrides config)
    #[arg(long, env = "ADWORDS_KIT__SESSION__CLIENT_CUSTOMER_ID", global = true)]
    client_customer_id: Option<String>,

    /// OAuth2 access token (overrides config)
    #[arg(long, env = "ADWORDS_KIT__SESSION__ACCESS_TOKEN", global = true)]
    access_token: Option<String>,

    /// API endpoint base URL (overrides config)
    #[arg(long, env = "ADWORDS_KIT__API__ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Print collected metrics in Prometheus text format to stderr on exit
    #[arg(long, default_value_t = false, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a report and print its records as JSON
    Report {
        #[arg(value_enum)]
        kind: ReportKindArg,

        /// Comma-separated report columns, e.g. AdGroupId,Clicks
        #[arg(short, long, value_delimiter = ',', required = true)]
        fields: Vec<String>,

        /// First day of the range (YYYY-MM-DD); defaults to today
        #[arg(long)]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<String>,

        /// Only rows for this campaign
        #[arg(long)]
        campaign_id: Option<String>,

        /// Only rows for this ad group
        #[arg(long)]
        ad_group_id: Option<String>,

        #[arg(long, default_value_t = false)]
        include_zero_impressions: bool,

        /// Ask the platform for its `Total` summary row and drop it when formatting
        #[arg(long, default_value_t = false)]
        with_summary: bool,

        /// Print the raw report instead of JSON records
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Print the selector a config would send, from a JSON option map
    Selector {
        #[arg(value_enum)]
        entity: EntityArg,

        /// Option map, e.g. '{"campaignId": 123}'
        #[arg(default_value = "{}")]
        options: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportKindArg {
    AdGroupPerformance,
    FinalUrl,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EntityArg {
    Campaign,
    AdGroup,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adwords_kit=info,adwords_reporting=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let metrics_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(token) = cli.developer_token {
        config.session.developer_token = token;
    }
    if let Some(id) = cli.client_customer_id {
        config.session.client_customer_id = id;
    }
    if let Some(token) = cli.access_token {
        config.session.access_token = token;
    }
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    match cli.command {
        Commands::Report {
            kind,
            fields,
            start,
            end,
            campaign_id,
            ad_group_id,
            include_zero_impressions,
            with_summary,
            raw,
        } => {
            let mut report_config = ReportConfig::new(ReportOverrides {
                start_date: start,
                end_date: end,
                fields: Some(fields),
                format: Some(DownloadFormat::Csv),
                include_zero_impressions: Some(include_zero_impressions),
                skip_report_summary: Some(!with_summary),
                ..ReportOverrides::default()
            })?;
            if let Some(id) = campaign_id {
                report_config.add_predicate(Predicate::equals("CampaignId", id));
            }
            if let Some(id) = ad_group_id {
                report_config.add_predicate(Predicate::equals("AdGroupId", id));
            }

            let session = AdwordsSession::from_config(&config)?;
            let downloader = HttpReportDownloader::new(&config.api, session)?;

            info!(
                kind = ?kind,
                start = report_config.start_date(),
                end = report_config.end_date(),
                "Downloading report"
            );

            let output = match kind {
                ReportKindArg::AdGroupPerformance => run_report(
                    AdGroupPerformanceReport::new(report_config),
                    &downloader,
                    raw,
                )?,
                ReportKindArg::FinalUrl => {
                    run_report(FinalUrlReport::new(report_config), &downloader, raw)?
                }
            };
            println!("{output}");
        }
        Commands::Selector { entity, options } => {
            let value: serde_json::Value = serde_json::from_str(&options)?;
            let selector = match entity {
                EntityArg::Campaign => CampaignConfig::from_value(value)?.to_selector(),
                EntityArg::AdGroup => AdGroupConfig::from_value(value)?.to_selector(),
            };
            println!("{}", serde_json::to_string_pretty(&selector)?);
        }
    }

    if cli.metrics {
        eprint!("{}", metrics_handle.render());
    }

    Ok(())
}

fn run_report<K: ReportKind>(
    mut report: Report<K>,
    downloader: &dyn ReportDownloader,
    raw: bool,
) -> anyhow::Result<String> {
    report.download(downloader)?;
    if raw {
        return Ok(report.raw().unwrap_or_default().to_string());
    }
    Ok(report.format()?.to_json()?)
}
