//! Campaign and ad group configuration with platform defaults.

pub mod ad_group;
pub mod campaign;

pub use ad_group::{AdGroupConfig, AdGroupOverrides};
pub use campaign::{CampaignConfig, CampaignOverrides};
