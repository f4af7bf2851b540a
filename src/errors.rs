use thiserror::Error;

use crate::aggregation::AggregationError;
use crate::campaigns::{CampaignError, StoreError};
use crate::export::ExportError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the campaign analytics core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Campaign error: {0}")]
    Campaign(#[from] CampaignError),

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
