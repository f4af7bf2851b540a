use thiserror::Error;

/// Custom error type for aggregation operations
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("No weeks to aggregate")]
    EmptyInput,
    #[error("Aggregate name is required")]
    MissingName,
    #[error("Aggregate period is required")]
    MissingPeriod,
    #[error("Cannot aggregate over synthetic campaign: {0}")]
    NestedAggregate(String),
}
