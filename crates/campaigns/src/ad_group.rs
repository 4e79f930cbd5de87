//! Ad group configuration.

use adwords_core::de::opt_string_or_number;
use adwords_core::types::AdGroupStatus;
use adwords_core::{AdwordsResult, EntityConfig, Predicate, Selection};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BID: f64 = 1.0;
const MICROS_PER_UNIT: f64 = 1_000_000.0;

const DEFAULT_FIELDS: [&str; 5] = ["Id", "Name", "CampaignId", "Status", "CpcBid"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupOverrides {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub ad_group_id: Option<String>,
    pub ad_group_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub campaign_id: Option<String>,
    pub status: Option<AdGroupStatus>,
    pub bid: Option<f64>,
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct AdGroupConfig {
    selection: Selection,
    ad_group_id: Option<String>,
    ad_group_name: Option<String>,
    campaign_id: Option<String>,
    status: AdGroupStatus,
    bid: f64,
}

impl AdGroupConfig {
    pub fn new(overrides: AdGroupOverrides) -> AdwordsResult<Self> {
        let mut config = Self {
            selection: Selection::new(DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()),
            ad_group_id: None,
            ad_group_name: None,
            campaign_id: None,
            status: AdGroupStatus::Enabled,
            bid: DEFAULT_BID,
        };

        if let Some(fields) = overrides.fields {
            config.selection.set_fields(fields);
        }
        if let Some(id) = overrides.ad_group_id {
            config
                .selection
                .add_predicate(Predicate::equals("Id", id.clone()));
            config.ad_group_id = Some(id);
        }
        if let Some(id) = overrides.campaign_id {
            config
                .selection
                .add_predicate(Predicate::equals("CampaignId", id.clone()));
            config.campaign_id = Some(id);
        }
        if let Some(name) = overrides.ad_group_name {
            config.ad_group_name = Some(name);
        }
        if let Some(status) = overrides.status {
            config.status = status;
        }
        if let Some(bid) = overrides.bid {
            config.bid = bid;
        }

        debug!(
            ad_group_id = config.ad_group_id.as_deref().unwrap_or("-"),
            campaign_id = config.campaign_id.as_deref().unwrap_or("-"),
            "Ad group config built"
        );
        Ok(config)
    }

    pub fn from_value(value: serde_json::Value) -> AdwordsResult<Self> {
        let overrides: AdGroupOverrides = serde_json::from_value(value)?;
        Self::new(overrides)
    }

    pub fn ad_group_id(&self) -> Option<&str> {
        self.ad_group_id.as_deref()
    }

    pub fn set_ad_group_id(&mut self, id: Option<String>) -> &mut Self {
        self.ad_group_id = id;
        self
    }

    pub fn ad_group_name(&self) -> Option<&str> {
        self.ad_group_name.as_deref()
    }

    pub fn set_ad_group_name(&mut self, name: Option<String>) -> &mut Self {
        self.ad_group_name = name;
        self
    }

    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }

    pub fn set_campaign_id(&mut self, id: Option<String>) -> &mut Self {
        self.campaign_id = id;
        self
    }

    pub fn status(&self) -> AdGroupStatus {
        self.status
    }

    pub fn set_status(&mut self, status: AdGroupStatus) -> &mut Self {
        self.status = status;
        self
    }

    /// Default max CPC bid in currency units.
    pub fn bid(&self) -> f64 {
        self.bid
    }

    pub fn set_bid(&mut self, bid: f64) -> &mut Self {
        self.bid = bid;
        self
    }

    pub fn bid_micros(&self) -> i64 {
        (self.bid * MICROS_PER_UNIT).round() as i64
    }
}

impl EntityConfig for AdGroupConfig {
    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
