use thiserror::Error;

/// Custom error type for campaign-related operations
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Campaign not found: {0}")]
    NotFound(String),
    #[error("Campaign already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid campaign name: {0}")]
    InvalidName(String),
}

/// Opaque failures from the external document store. The core does not
/// retry; the UI shell owns user notification.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
    #[error("Subscription failed: {0}")]
    SubscribeFailed(String),
}
