mod metrics_service;

pub use metrics_service::MetricsService;
