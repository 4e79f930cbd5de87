//! Campaign configuration — defaults for a new search campaign, overridable
//! per request, plus the `Id` predicate used when selecting an existing one.

use adwords_core::de::opt_string_or_number;
use adwords_core::types::{
    AdServingOptimizationStatus, AdvertisingChannelType, BiddingStrategyType,
    BudgetDeliveryMethod, CampaignStatus, ServingStatus,
};
use adwords_core::{dates, AdwordsResult, EntityConfig, Predicate, Selection};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

const DEFAULT_BUDGET: f64 = 50.0;
const MICROS_PER_UNIT: f64 = 1_000_000.0;

const DEFAULT_FIELDS: [&str; 8] = [
    "Id",
    "Name",
    "Status",
    "ServingStatus",
    "StartDate",
    "EndDate",
    "AdvertisingChannelType",
    "BudgetId",
];

/// Caller-supplied overrides. Keys use the camelCase names of the
/// platform's option maps, so a JSON object can be deserialized directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOverrides {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub campaign_id: Option<String>,
    pub campaign_name: Option<String>,
    pub advertising_channel_type: Option<AdvertisingChannelType>,
    pub status: Option<CampaignStatus>,
    pub budget: Option<f64>,
    pub bidding_strategy_type: Option<BiddingStrategyType>,
    pub budget_delivery_method: Option<BudgetDeliveryMethod>,
    pub target_google_search: Option<bool>,
    pub target_search_network: Option<bool>,
    pub target_content_network: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub ad_serving_optimization_status: Option<AdServingOptimizationStatus>,
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CampaignConfig {
    selection: Selection,
    campaign_id: Option<String>,
    campaign_name: Option<String>,
    advertising_channel_type: AdvertisingChannelType,
    status: CampaignStatus,
    budget: f64,
    budget_name: String,
    bidding_strategy_type: BiddingStrategyType,
    budget_delivery_method: BudgetDeliveryMethod,
    target_google_search: bool,
    target_search_network: bool,
    target_content_network: bool,
    start_date: String,
    end_date: Option<String>,
    ad_serving_optimization_status: Option<AdServingOptimizationStatus>,
    serving_status: ServingStatus,
}

impl CampaignConfig {
    pub fn new(overrides: CampaignOverrides) -> AdwordsResult<Self> {
        let mut config = Self::defaults();

        if let Some(fields) = overrides.fields {
            config.selection.set_fields(fields);
        }
        if let Some(name) = overrides.campaign_name {
            config.campaign_name = Some(name);
        }
        if let Some(id) = overrides.campaign_id {
            config
                .selection
                .add_predicate(Predicate::equals("Id", id.clone()));
            config.campaign_id = Some(id);
        }
        if let Some(channel) = overrides.advertising_channel_type {
            config.advertising_channel_type = channel;
        }
        if let Some(status) = overrides.status {
            config.status = status;
        }
        if let Some(budget) = overrides.budget {
            config.budget = budget;
        }
        if let Some(strategy) = overrides.bidding_strategy_type {
            config.bidding_strategy_type = strategy;
        }
        if let Some(method) = overrides.budget_delivery_method {
            config.budget_delivery_method = method;
        }
        if let Some(v) = overrides.target_google_search {
            config.target_google_search = v;
        }
        if let Some(v) = overrides.target_search_network {
            config.target_search_network = v;
        }
        if let Some(v) = overrides.target_content_network {
            config.target_content_network = v;
        }
        if let Some(date) = overrides.start_date {
            config.start_date = dates::normalize(&date)?;
        }
        if let Some(date) = overrides.end_date {
            config.end_date = Some(dates::normalize(&date)?);
        }
        if let Some(status) = overrides.ad_serving_optimization_status {
            config.ad_serving_optimization_status = Some(status);
        }

        debug!(
            campaign_id = config.campaign_id.as_deref().unwrap_or("-"),
            predicates = config.selection.predicates().len(),
            "Campaign config built"
        );
        Ok(config)
    }

    /// Build from a raw option map such as `{"campaignId": 123, "budget": 80}`.
    /// Unknown keys are ignored.
    pub fn from_value(value: serde_json::Value) -> AdwordsResult<Self> {
        let overrides: CampaignOverrides = serde_json::from_value(value)?;
        Self::new(overrides)
    }

    fn defaults() -> Self {
        Self {
            selection: Selection::new(DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()),
            campaign_id: None,
            campaign_name: None,
            advertising_channel_type: AdvertisingChannelType::Search,
            status: CampaignStatus::Paused,
            budget: DEFAULT_BUDGET,
            budget_name: format!("Adwords Kit Budget #{}", Uuid::new_v4().simple()),
            bidding_strategy_type: BiddingStrategyType::ManualCpc,
            budget_delivery_method: BudgetDeliveryMethod::Standard,
            target_google_search: true,
            target_search_network: true,
            target_content_network: true,
            start_date: dates::today(),
            end_date: None,
            ad_serving_optimization_status: None,
            serving_status: ServingStatus::Serving,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }

    pub fn set_campaign_id(&mut self, id: Option<String>) -> &mut Self {
        self.campaign_id = id;
        self
    }

    pub fn campaign_name(&self) -> Option<&str> {
        self.campaign_name.as_deref()
    }

    pub fn set_campaign_name(&mut self, name: Option<String>) -> &mut Self {
        self.campaign_name = name;
        self
    }

    pub fn advertising_channel_type(&self) -> AdvertisingChannelType {
        self.advertising_channel_type
    }

    pub fn set_advertising_channel_type(&mut self, channel: AdvertisingChannelType) -> &mut Self {
        self.advertising_channel_type = channel;
        self
    }

    pub fn status(&self) -> CampaignStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CampaignStatus) -> &mut Self {
        self.status = status;
        self
    }

    /// Daily budget in currency units; 50 means 50 of the account currency.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn set_budget(&mut self, budget: f64) -> &mut Self {
        self.budget = budget;
        self
    }

    pub fn budget_micros(&self) -> i64 {
        (self.budget * MICROS_PER_UNIT).round() as i64
    }

    pub fn budget_name(&self) -> &str {
        &self.budget_name
    }

    pub fn set_budget_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.budget_name = name.into();
        self
    }

    pub fn bidding_strategy_type(&self) -> BiddingStrategyType {
        self.bidding_strategy_type
    }

    pub fn set_bidding_strategy_type(&mut self, strategy: BiddingStrategyType) -> &mut Self {
        self.bidding_strategy_type = strategy;
        self
    }

    pub fn budget_delivery_method(&self) -> BudgetDeliveryMethod {
        self.budget_delivery_method
    }

    pub fn set_budget_delivery_method(&mut self, method: BudgetDeliveryMethod) -> &mut Self {
        self.budget_delivery_method = method;
        self
    }

    pub fn target_google_search(&self) -> bool {
        self.target_google_search
    }

    pub fn set_target_google_search(&mut self, value: bool) -> &mut Self {
        self.target_google_search = value;
        self
    }

    pub fn target_search_network(&self) -> bool {
        self.target_search_network
    }

    pub fn set_target_search_network(&mut self, value: bool) -> &mut Self {
        self.target_search_network = value;
        self
    }

    pub fn target_content_network(&self) -> bool {
        self.target_content_network
    }

    pub fn set_target_content_network(&mut self, value: bool) -> &mut Self {
        self.target_content_network = value;
        self
    }

    /// `YYYYMMDD`.
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.start_date = date.into();
        self
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    pub fn set_end_date(&mut self, date: Option<String>) -> &mut Self {
        self.end_date = date;
        self
    }

    pub fn ad_serving_optimization_status(&self) -> Option<AdServingOptimizationStatus> {
        self.ad_serving_optimization_status
    }

    pub fn set_ad_serving_optimization_status(
        &mut self,
        status: Option<AdServingOptimizationStatus>,
    ) -> &mut Self {
        self.ad_serving_optimization_status = status;
        self
    }

    pub fn serving_status(&self) -> ServingStatus {
        self.serving_status
    }

    pub fn set_serving_status(&mut self, status: ServingStatus) -> &mut Self {
        self.serving_status = status;
        self
    }
}

impl EntityConfig for CampaignConfig {
    fn selection(&self) -> &Selection {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use adwords_core::{AdwordsError, PredicateOperator};
    use serde_json::json;

    #[test]
    fn test_defaults_without_overrides() {
        let config = CampaignConfig::new(CampaignOverrides::default()).unwrap();
        assert_eq!(config.campaign_id(), None);
        assert_eq!(config.campaign_name(), None);
        assert_eq!(config.advertising_channel_type(), AdvertisingChannelType::Search);
        assert_eq!(config.status(), CampaignStatus::Paused);
        assert_eq!(config.budget(), 50.0);
        assert!(config.budget_name().starts_with("Adwords Kit Budget #"));
        assert_eq!(config.bidding_strategy_type(), BiddingStrategyType::ManualCpc);
        assert_eq!(config.budget_delivery_method(), BudgetDeliveryMethod::Standard);
        assert!(config.target_google_search());
        assert!(config.target_search_network());
        assert!(config.target_content_network());
        assert_eq!(config.start_date(), dates::today());
        assert_eq!(config.end_date(), None);
        assert_eq!(config.ad_serving_optimization_status(), None);
        assert_eq!(config.serving_status(), ServingStatus::Serving);
        assert!(config.predicates().is_empty());
        assert_eq!(config.fields().len(), DEFAULT_FIELDS.len());
    }

    #[test]
    fn test_budget_names_are_unique() {
        let a = CampaignConfig::new(CampaignOverrides::default()).unwrap();
        let b = CampaignConfig::new(CampaignOverrides::default()).unwrap();
        assert_ne!(a.budget_name(), b.budget_name());
    }

    #[test]
    fn test_every_override_wins() {
        let config = CampaignConfig::from_value(json!({
            "campaignName": "Winter Boots",
            "advertisingChannelType": "DISPLAY",
            "status": "ENABLED",
            "budget": 120.5,
            "biddingStrategyType": "TARGET_CPA",
            "budgetDeliveryMethod": "ACCELERATED",
            "targetGoogleSearch": false,
            "targetSearchNetwork": false,
            "targetContentNetwork": false,
            "startDate": "2016-11-03",
            "endDate": "2016/12/24",
            "adServingOptimizationStatus": "ROTATE_INDEFINITELY"
        }))
        .unwrap();

        assert_eq!(config.campaign_name(), Some("Winter Boots"));
        assert_eq!(config.advertising_channel_type(), AdvertisingChannelType::Display);
        assert_eq!(config.status(), CampaignStatus::Enabled);
        assert_eq!(config.budget(), 120.5);
        assert_eq!(config.budget_micros(), 120_500_000);
        assert_eq!(config.bidding_strategy_type(), BiddingStrategyType::TargetCpa);
        assert_eq!(config.budget_delivery_method(), BudgetDeliveryMethod::Accelerated);
        assert!(!config.target_google_search());
        assert!(!config.target_search_network());
        assert!(!config.target_content_network());
        assert_eq!(config.start_date(), "20161103");
        assert_eq!(config.end_date(), Some("20161224"));
        assert_eq!(
            config.ad_serving_optimization_status(),
            Some(AdServingOptimizationStatus::RotateIndefinitely)
        );
        assert!(config.predicates().is_empty());
    }

    #[test]
    fn test_campaign_id_adds_single_equals_predicate() {
        let config = CampaignConfig::from_value(json!({ "campaignId": 987654321 })).unwrap();
        assert_eq!(config.campaign_id(), Some("987654321"));
        assert_eq!(config.predicates().len(), 1);

        let predicate = &config.predicates()[0];
        assert_eq!(predicate.field, "Id");
        assert_eq!(predicate.operator, PredicateOperator::Equals);
        assert_eq!(predicate.values, vec!["987654321".to_string()]);
    }

    #[test]
    fn test_setter_does_not_touch_predicates() {
        let mut config = CampaignConfig::new(CampaignOverrides::default()).unwrap();
        config
            .set_campaign_id(Some("42".into()))
            .set_budget(10.0)
            .set_serving_status(ServingStatus::Suspended);
        assert_eq!(config.campaign_id(), Some("42"));
        assert_eq!(config.budget(), 10.0);
        assert_eq!(config.serving_status(), ServingStatus::Suspended);
        assert!(config.predicates().is_empty());
    }

    #[test]
    fn test_unknown_keys_ignored_and_bad_dates_rejected() {
        let config = CampaignConfig::from_value(json!({ "somethingElse": 1 })).unwrap();
        assert_eq!(config.budget(), 50.0);

        let err = CampaignConfig::from_value(json!({ "startDate": "soon" })).unwrap_err();
        assert!(matches!(err, AdwordsError::InvalidDate(_)));
    }

    #[test]
    fn test_fields_override_replaces_selection() {
        let config = CampaignConfig::from_value(json!({ "fields": ["Id", "Amount"] })).unwrap();
        assert_eq!(config.fields(), ["Id".to_string(), "Amount".to_string()]);
        let selector = config.to_selector();
        assert_eq!(selector.fields.len(), 2);
    }
}
