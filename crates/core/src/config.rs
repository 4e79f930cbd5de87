use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADWORDS_KIT__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub version: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Credentials for the advertising account. Empty by default; the report
/// endpoint rejects requests that do not carry all three.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub developer_token: String,
    #[serde(default)]
    pub client_customer_id: String,
    #[serde(default)]
    pub access_token: String,
}

// Default functions
fn default_endpoint() -> String {
    "https://adwords.google.com".to_string()
}
fn default_api_version() -> String {
    "v201609".to_string()
}
fn default_timeout_ms() -> u64 {
    60_000
}
fn default_user_agent() -> String {
    "adwords-kit".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            version: default_api_version(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the report download service for the configured version.
    pub fn report_download_url(&self) -> String {
        format!(
            "{}/api/adwords/reportdownload/{}",
            self.endpoint.trim_end_matches('/'),
            self.version
        )
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADWORDS_KIT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
