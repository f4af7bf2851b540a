use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;

use super::campaigns_model::{Campaign, CampaignMap};
use super::campaigns_traits::CampaignRepositoryTrait;
use crate::constants::CAMPAIGNS_COLLECTION;
use crate::errors::Result;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

fn document_key(partition: &str, name: &str) -> String {
    format!("{}/{}/{}", partition, CAMPAIGNS_COLLECTION, name)
}

fn collection_prefix(partition: &str) -> String {
    format!("{}/{}/", partition, CAMPAIGNS_COLLECTION)
}

/// In-memory stand-in for the managed document store, used by tests and
/// local runs. Keeps the production contract: whole-document writes and
/// full-collection snapshots on every change.
pub struct MemoryCampaignRepository {
    documents: DashMap<String, Campaign>,
    channels: DashMap<String, broadcast::Sender<CampaignMap>>,
}

impl MemoryCampaignRepository {
    pub fn new() -> Self {
        MemoryCampaignRepository {
            documents: DashMap::new(),
            channels: DashMap::new(),
        }
    }

    fn snapshot(&self, partition: &str) -> CampaignMap {
        let prefix = collection_prefix(partition);
        self.documents
            .iter()
            .filter_map(|entry| {
                entry
                    .key()
                    .strip_prefix(&prefix)
                    .map(|name| (name.to_string(), entry.value().clone()))
            })
            .collect()
    }

    fn publish(&self, partition: &str) {
        if let Some(sender) = self.channels.get(partition) {
            // No receivers is fine; snapshots are best-effort.
            let _ = sender.send(self.snapshot(partition));
        }
    }
}

impl Default for MemoryCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignRepositoryTrait for MemoryCampaignRepository {
    async fn write_campaign(
        &self,
        partition: &str,
        name: &str,
        campaign: &Campaign,
    ) -> Result<()> {
        self.documents
            .insert(document_key(partition, name), campaign.clone());
        self.publish(partition);
        Ok(())
    }

    async fn delete_campaign(&self, partition: &str, name: &str) -> Result<()> {
        self.documents.remove(&document_key(partition, name));
        self.publish(partition);
        Ok(())
    }

    fn load_campaigns(&self, partition: &str) -> Result<CampaignMap> {
        Ok(self.snapshot(partition))
    }

    fn subscribe(&self, partition: &str) -> broadcast::Receiver<CampaignMap> {
        self.channels
            .entry(partition.to_string())
            .or_insert_with(|| broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY).0)
            .subscribe()
    }
}
