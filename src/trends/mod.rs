mod trends_model;
mod trends_service;

pub use trends_model::{MetricDirection, MetricField, MetricTrend, TrendSentiment, WeekTrend};
pub use trends_service::TrendService;
