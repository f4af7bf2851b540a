use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::AGGREGATE_NAME_PREFIX;

/// One reporting period of one campaign.
///
/// Raw fields hold the user's input exactly as typed; derived fields are
/// computed at save time and never edited afterwards. All numeric values are
/// kept as text so they survive display/re-parse round trips unchanged.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    // Raw fields (user-supplied)
    pub week_reference: String,
    pub date: String,
    pub ctr: String,
    pub budget: String,
    pub landing_views: String,
    pub clicks: String,
    pub leads: String,
    pub unique_leads: String,
    pub appointments: String,
    pub cpc: String,

    /// 1-based position within the campaign at creation time; immutable.
    pub week_number: u32,

    // Derived fields, always "0.00"-guarded 2-place fixed-point text
    pub cost_per_lead: String,
    pub cost_per_unique_lead: String,
    pub cost_per_appointment: String,
    pub cr_landing: String,
    pub appointment_rate: String,

    /// Set only on synthetic records produced by the aggregator.
    #[serde(default)]
    pub is_aggregate: bool,
    /// Source campaign names a synthetic record was built from, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_campaigns: Vec<String>,
}

/// Whole-document value stored under a campaign's name. The week list is
/// append-only; every write replaces the full document.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub weeks: Vec<WeekRecord>,
}

impl Campaign {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }
}

/// The full set of one user's campaigns, keyed by campaign name. Always
/// replaced wholesale on store notifications, never partially mutated.
pub type CampaignMap = HashMap<String, Campaign>;

/// Raw form input for one week, before metrics derivation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewWeek {
    pub week_reference: String,
    pub date: String,
    pub ctr: String,
    pub budget: String,
    pub landing_views: String,
    pub clicks: String,
    pub leads: String,
    pub unique_leads: String,
    pub appointments: String,
    pub cpc: String,
}

/// Transient input for building a synthetic summary campaign. Consumed once,
/// never persisted.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AggregateConfig {
    pub name: String,
    pub period: String,
    pub source_campaigns: Vec<String>,
}

/// A campaign whose name carries the reserved prefix is synthetic (built by
/// the aggregator, not manually entered).
pub fn is_aggregate_name(name: &str) -> bool {
    name.starts_with(AGGREGATE_NAME_PREFIX)
}
