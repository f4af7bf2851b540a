// Module declarations
pub(crate) mod campaigns_errors;
pub(crate) mod campaigns_model;
pub(crate) mod campaigns_repository;
pub(crate) mod campaigns_service;
pub(crate) mod campaigns_traits;

// Re-export the public interface
pub use campaigns_model::{
    is_aggregate_name, AggregateConfig, Campaign, CampaignMap, NewWeek, WeekRecord,
};
pub use campaigns_repository::MemoryCampaignRepository;
pub use campaigns_service::CampaignService;
pub use campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};

// Re-export error types for convenience
pub use campaigns_errors::{CampaignError, StoreError};
