use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::campaigns_errors::CampaignError;
use super::campaigns_model::{
    is_aggregate_name, AggregateConfig, Campaign, CampaignMap, NewWeek, WeekRecord,
};
use super::campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};
use crate::aggregation::{AggregationError, AggregationService};
use crate::constants::AGGREGATE_NAME_PREFIX;
use crate::errors::Result;
use crate::metrics::MetricsService;

/// Service for managing campaigns and their week histories. Holds no
/// campaign state: the caller passes the current map in and receives the
/// next state through the store subscription.
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    metrics: MetricsService,
    aggregation: AggregationService,
}

impl CampaignService {
    pub fn new(repository: Arc<dyn CampaignRepositoryTrait>) -> Self {
        CampaignService {
            repository,
            metrics: MetricsService::new(),
            aggregation: AggregationService::new(),
        }
    }

    fn validate_aggregate_config(
        campaigns: &CampaignMap,
        config: &AggregateConfig,
    ) -> Result<()> {
        if config.name.trim().is_empty() {
            return Err(AggregationError::MissingName.into());
        }
        if config.period.trim().is_empty() {
            return Err(AggregationError::MissingPeriod.into());
        }
        if config.source_campaigns.is_empty() {
            return Err(AggregationError::EmptyInput.into());
        }
        for source in &config.source_campaigns {
            if is_aggregate_name(source) {
                return Err(AggregationError::NestedAggregate(source.clone()).into());
            }
            if !campaigns.contains_key(source) {
                return Err(CampaignError::NotFound(source.clone()).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignServiceTrait for CampaignService {
    /// Creates a new empty campaign. Names are workspace-unique, free text.
    async fn create_campaign(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        name: &str,
    ) -> Result<Campaign> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CampaignError::InvalidName("name is empty".to_string()).into());
        }
        if campaigns.contains_key(name) {
            return Err(CampaignError::AlreadyExists(name.to_string()).into());
        }

        debug!("Creating campaign '{}'", name);
        let campaign = Campaign::default();
        self.repository
            .write_campaign(partition, name, &campaign)
            .await?;
        Ok(campaign)
    }

    /// Derives one week's metrics, appends it to the campaign, and rewrites
    /// the whole document. Sequence numbers are assigned here as
    /// `current week count + 1` and never change afterwards.
    async fn save_week(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        campaign_name: &str,
        raw: NewWeek,
    ) -> Result<WeekRecord> {
        let campaign = campaigns
            .get(campaign_name)
            .ok_or_else(|| CampaignError::NotFound(campaign_name.to_string()))?;

        let week = self
            .metrics
            .derive_week(&raw, campaign.week_count() as u32 + 1);

        let mut updated = campaign.clone();
        updated.weeks.push(week.clone());
        self.repository
            .write_campaign(partition, campaign_name, &updated)
            .await?;
        Ok(week)
    }

    /// Deletes a campaign wholesale. There is no per-week deletion path.
    async fn delete_campaign(&self, partition: &str, name: &str) -> Result<()> {
        debug!("Deleting campaign '{}'", name);
        self.repository.delete_campaign(partition, name).await
    }

    /// Campaign names eligible as aggregation sources: everything except
    /// synthetic campaigns (aggregates never nest).
    fn aggregation_candidates(&self, campaigns: &CampaignMap) -> Vec<String> {
        let mut names: Vec<String> = campaigns
            .keys()
            .filter(|name| !is_aggregate_name(name))
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Builds a synthetic summary campaign from the selected sources.
    /// Validation runs before any computation; no partial aggregate is ever
    /// written.
    async fn create_aggregate(
        &self,
        partition: &str,
        campaigns: &CampaignMap,
        config: AggregateConfig,
    ) -> Result<(String, Campaign)> {
        Self::validate_aggregate_config(campaigns, &config)?;

        let target_name = format!("{}{}", AGGREGATE_NAME_PREFIX, config.name.trim());
        if campaigns.contains_key(&target_name) {
            return Err(CampaignError::AlreadyExists(target_name).into());
        }

        // Cross-campaign weeks are concatenated in selection order, never
        // matched by position or date.
        let weeks: Vec<WeekRecord> = config
            .source_campaigns
            .iter()
            .filter_map(|name| campaigns.get(name))
            .flat_map(|campaign| campaign.weeks.iter().cloned())
            .collect();

        let mut record = self
            .aggregation
            .aggregate(&weeks, &config.name, &config.period)?;
        record.source_campaigns = config.source_campaigns.clone();

        let campaign = Campaign {
            weeks: vec![record],
        };
        self.repository
            .write_campaign(partition, &target_name, &campaign)
            .await?;
        Ok((target_name, campaign))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaigns::campaigns_repository::MemoryCampaignRepository;
    use crate::Error;

    const PARTITION: &str = "user@example.com";

    fn service() -> (Arc<MemoryCampaignRepository>, CampaignService) {
        let repo = Arc::new(MemoryCampaignRepository::new());
        let service = CampaignService::new(repo.clone());
        (repo, service)
    }

    fn raw_week(budget: &str, leads: &str, appointments: &str) -> NewWeek {
        NewWeek {
            budget: budget.to_string(),
            leads: leads.to_string(),
            appointments: appointments.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_and_duplicate_names() {
        let (repo, service) = service();
        let campaigns = repo.load_campaigns(PARTITION).unwrap();

        assert!(matches!(
            service.create_campaign(PARTITION, &campaigns, "  ").await,
            Err(Error::Campaign(CampaignError::InvalidName(_)))
        ));

        service
            .create_campaign(PARTITION, &campaigns, "Spring")
            .await
            .unwrap();
        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        assert!(matches!(
            service.create_campaign(PARTITION, &campaigns, "Spring").await,
            Err(Error::Campaign(CampaignError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn save_week_appends_with_next_sequence_number() {
        let (repo, service) = service();
        service
            .create_campaign(PARTITION, &CampaignMap::new(), "Spring")
            .await
            .unwrap();

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        let first = service
            .save_week(PARTITION, &campaigns, "Spring", raw_week("500", "25", "10"))
            .await
            .unwrap();
        assert_eq!(first.week_number, 1);
        assert_eq!(first.cost_per_lead, "20.00");

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        let second = service
            .save_week(PARTITION, &campaigns, "Spring", raw_week("300", "30", "5"))
            .await
            .unwrap();
        assert_eq!(second.week_number, 2);

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        let weeks = &campaigns["Spring"].weeks;
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[1].week_number, 2);
    }

    #[tokio::test]
    async fn save_week_requires_an_existing_campaign() {
        let (_repo, service) = service();
        let result = service
            .save_week(
                PARTITION,
                &CampaignMap::new(),
                "Missing",
                raw_week("1", "1", "1"),
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::Campaign(CampaignError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn aggregate_builds_prefixed_single_week_campaign() {
        let (repo, service) = service();
        for name in ["A", "B"] {
            service
                .create_campaign(PARTITION, &repo.load_campaigns(PARTITION).unwrap(), name)
                .await
                .unwrap();
        }
        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        service
            .save_week(PARTITION, &campaigns, "A", raw_week("100", "10", "5"))
            .await
            .unwrap();
        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        service
            .save_week(PARTITION, &campaigns, "B", raw_week("200", "20", "5"))
            .await
            .unwrap();

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        let (name, campaign) = service
            .create_aggregate(
                PARTITION,
                &campaigns,
                AggregateConfig {
                    name: "Q4".to_string(),
                    period: "Oct-Dec".to_string(),
                    source_campaigns: vec!["A".to_string(), "B".to_string()],
                },
            )
            .await
            .unwrap();

        assert!(is_aggregate_name(&name));
        assert_eq!(campaign.week_count(), 1);
        let record = &campaign.weeks[0];
        assert_eq!(record.budget, "300.00");
        assert_eq!(record.cost_per_appointment, "30.00");
        assert_eq!(record.source_campaigns, vec!["A", "B"]);
        assert!(record.is_aggregate);
    }

    #[tokio::test]
    async fn synthetic_campaigns_are_not_aggregation_candidates() {
        let (repo, service) = service();
        service
            .create_campaign(PARTITION, &CampaignMap::new(), "A")
            .await
            .unwrap();
        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        service
            .save_week(PARTITION, &campaigns, "A", raw_week("100", "10", "5"))
            .await
            .unwrap();

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        service
            .create_aggregate(
                PARTITION,
                &campaigns,
                AggregateConfig {
                    name: "Summary".to_string(),
                    period: "H1".to_string(),
                    source_campaigns: vec!["A".to_string()],
                },
            )
            .await
            .unwrap();

        let campaigns = repo.load_campaigns(PARTITION).unwrap();
        assert_eq!(campaigns.len(), 2);
        assert_eq!(service.aggregation_candidates(&campaigns), vec!["A"]);
    }

    #[tokio::test]
    async fn aggregate_config_is_validated_before_any_write() {
        let (repo, service) = service();
        service
            .create_campaign(PARTITION, &CampaignMap::new(), "A")
            .await
            .unwrap();
        let campaigns = repo.load_campaigns(PARTITION).unwrap();

        let cases = [
            (
                AggregateConfig {
                    name: "".to_string(),
                    period: "p".to_string(),
                    source_campaigns: vec!["A".to_string()],
                },
                "missing name",
            ),
            (
                AggregateConfig {
                    name: "n".to_string(),
                    period: " ".to_string(),
                    source_campaigns: vec!["A".to_string()],
                },
                "missing period",
            ),
            (
                AggregateConfig {
                    name: "n".to_string(),
                    period: "p".to_string(),
                    source_campaigns: vec![],
                },
                "no sources",
            ),
            (
                AggregateConfig {
                    name: "n".to_string(),
                    period: "p".to_string(),
                    source_campaigns: vec!["Missing".to_string()],
                },
                "unknown source",
            ),
        ];
        for (config, label) in cases {
            assert!(
                service
                    .create_aggregate(PARTITION, &campaigns, config)
                    .await
                    .is_err(),
                "expected rejection: {}",
                label
            );
        }

        // Nothing was written by any of the rejected configs
        assert_eq!(repo.load_campaigns(PARTITION).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn aggregating_a_synthetic_source_is_rejected() {
        let (_repo, service) = service();
        let mut campaigns = CampaignMap::new();
        let synthetic = format!("{}Old", AGGREGATE_NAME_PREFIX);
        campaigns.insert(synthetic.clone(), Campaign::default());

        let result = service
            .create_aggregate(
                PARTITION,
                &campaigns,
                AggregateConfig {
                    name: "Nested".to_string(),
                    period: "p".to_string(),
                    source_campaigns: vec![synthetic],
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::Aggregation(AggregationError::NestedAggregate(_)))
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_whole_campaign() {
        let (repo, service) = service();
        service
            .create_campaign(PARTITION, &CampaignMap::new(), "Spring")
            .await
            .unwrap();
        service.delete_campaign(PARTITION, "Spring").await.unwrap();
        assert!(repo.load_campaigns(PARTITION).unwrap().is_empty());
    }
}
