use async_trait::async_trait;
use tokio::sync::broadcast;

use super::campaigns_model::{AggregateConfig, Campaign, CampaignMap, NewWeek, WeekRecord};
use crate::errors::Result;

/// Contract against the external document store. Documents are keyed
/// `<partition>/campaigns/<campaign-name>`; every mutation rewrites the whole
/// week list — partial updates are deliberately not part of the contract.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    /// Creates or replaces a campaign's full document.
    async fn write_campaign(&self, partition: &str, name: &str, campaign: &Campaign)
        -> Result<()>;
    /// Removes a campaign document wholesale.
    async fn delete_campaign(&self, partition: &str, name: &str) -> Result<()>;
    /// Current full collection for a partition.
    fn load_campaigns(&self, partition: &str) -> Result<CampaignMap>;
    /// Emits the full current collection on every change, including the
    /// subscriber's own writes.
    fn subscribe(&self, partition: &str) -> broadcast::Receiver<CampaignMap>;
}

/// Trait for campaign service operations. The caller passes the current
/// campaign map in; the service never holds campaign state of its own.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    async fn create_campaign(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        name: &str,
    ) -> Result<Campaign>;
    async fn save_week(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        campaign_name: &str,
        raw: NewWeek,
    ) -> Result<WeekRecord>;
    async fn delete_campaign(&self, partition: &str, name: &str) -> Result<()>;
    fn aggregation_candidates(&self, campaigns: &CampaignMap) -> Vec<String>;
    async fn create_aggregate(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        config: AggregateConfig,
    ) -> Result<(String, Campaign)>;
}
