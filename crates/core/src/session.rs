use crate::config::{AppConfig, SessionConfig};
use crate::error::{AdwordsError, AdwordsResult};

/// Authenticated account context for calls to the advertising platform.
#[derive(Clone)]
pub struct AdwordsSession {
    developer_token: String,
    client_customer_id: String,
    access_token: String,
}

impl AdwordsSession {
    pub fn new(
        developer_token: impl Into<String>,
        client_customer_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            developer_token: developer_token.into(),
            client_customer_id: client_customer_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Build a session from loaded configuration, rejecting missing credentials.
    pub fn from_config(config: &AppConfig) -> AdwordsResult<Self> {
        let SessionConfig {
            developer_token,
            client_customer_id,
            access_token,
        } = &config.session;

        for (name, value) in [
            ("developer_token", developer_token),
            ("client_customer_id", client_customer_id),
            ("access_token", access_token),
        ] {
            if value.trim().is_empty() {
                return Err(AdwordsError::config(format!("session.{name} is not set")));
            }
        }

        Ok(Self::new(
            developer_token.clone(),
            client_customer_id.clone(),
            access_token.clone(),
        ))
    }

    pub fn developer_token(&self) -> &str {
        &self.developer_token
    }

    pub fn client_customer_id(&self) -> &str {
        &self.client_customer_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// Keep tokens out of logs.
impl std::fmt::Debug for AdwordsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdwordsSession")
            .field("client_customer_id", &self.client_customer_id)
            .finish_non_exhaustive()
    }
}
