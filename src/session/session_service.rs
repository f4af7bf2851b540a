use log::debug;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

use super::session_model::UserIdentity;
use crate::campaigns::{CampaignMap, CampaignRepositoryTrait};
use crate::errors::Result;

/// Owns the one mutable piece of process state: the signed-in identity and
/// the in-memory campaign map. The map is only ever replaced wholesale with
/// store snapshots; computation components receive it as a plain parameter.
pub struct SessionService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    identity: RwLock<Option<UserIdentity>>,
    campaigns: RwLock<CampaignMap>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn CampaignRepositoryTrait>) -> Self {
        SessionService {
            repository,
            identity: RwLock::new(None),
            campaigns: RwLock::new(CampaignMap::new()),
        }
    }

    /// Initializes the session: loads the current campaign set and opens the
    /// store subscription for the identity's partition. The returned receiver
    /// delivers a full snapshot on every change, including this session's
    /// own writes; feed each one to [`apply_snapshot`](Self::apply_snapshot).
    pub fn login(&self, identity: UserIdentity) -> Result<broadcast::Receiver<CampaignMap>> {
        debug!("Starting session for {}", identity.email);
        let receiver = self.repository.subscribe(&identity.email);
        let initial = self.repository.load_campaigns(&identity.email)?;

        *self.campaigns.write().unwrap() = initial;
        *self.identity.write().unwrap() = Some(identity);
        Ok(receiver)
    }

    /// Replaces the campaign map wholesale. Never merges.
    pub fn apply_snapshot(&self, snapshot: CampaignMap) {
        *self.campaigns.write().unwrap() = snapshot;
    }

    /// Current campaign map, cloned for the caller.
    pub fn campaigns(&self) -> CampaignMap {
        self.campaigns.read().unwrap().clone()
    }

    /// Storage partition key of the signed-in user, if any.
    pub fn partition(&self) -> Option<String> {
        self.identity
            .read()
            .unwrap()
            .as_ref()
            .map(|identity| identity.email.clone())
    }

    /// Tears the session down: clears identity and campaign state.
    pub fn logout(&self) {
        debug!("Ending session");
        *self.identity.write().unwrap() = None;
        self.campaigns.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaigns::{Campaign, MemoryCampaignRepository};

    fn identity() -> UserIdentity {
        UserIdentity {
            email: "user@example.com".to_string(),
            display_name: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn login_loads_existing_campaigns() {
        let repo = Arc::new(MemoryCampaignRepository::new());
        repo.write_campaign("user@example.com", "Spring", &Campaign::default())
            .await
            .unwrap();

        let session = SessionService::new(repo);
        session.login(identity()).unwrap();

        assert_eq!(session.partition().as_deref(), Some("user@example.com"));
        assert!(session.campaigns().contains_key("Spring"));
    }

    #[tokio::test]
    async fn snapshots_replace_the_map_wholesale() {
        let repo = Arc::new(MemoryCampaignRepository::new());
        let session = SessionService::new(repo.clone());
        let mut receiver = session.login(identity()).unwrap();

        repo.write_campaign("user@example.com", "A", &Campaign::default())
            .await
            .unwrap();
        session.apply_snapshot(receiver.recv().await.unwrap());
        assert_eq!(session.campaigns().len(), 1);

        repo.delete_campaign("user@example.com", "A").await.unwrap();
        session.apply_snapshot(receiver.recv().await.unwrap());
        assert!(session.campaigns().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_all_session_state() {
        let repo = Arc::new(MemoryCampaignRepository::new());
        repo.write_campaign("user@example.com", "Spring", &Campaign::default())
            .await
            .unwrap();

        let session = SessionService::new(repo);
        session.login(identity()).unwrap();
        session.logout();

        assert_eq!(session.partition(), None);
        assert!(session.campaigns().is_empty());
    }
}
