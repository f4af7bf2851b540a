mod aggregation_errors;
mod aggregation_service;

pub use aggregation_errors::AggregationError;
pub use aggregation_service::AggregationService;
