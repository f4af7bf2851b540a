use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::campaigns::WeekRecord;
use crate::utils::parse_or_zero;

/// Whether a metric improves when it goes up or when it goes down.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum MetricDirection {
    /// Volume and rate metrics: more is better.
    HigherIsBetter,
    /// Cost metrics: less is better.
    LowerIsBetter,
}

/// Three-way classification of a week-over-week delta. Drives presentation
/// only (green/red/gray), never data.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum TrendSentiment {
    Favorable,
    Unfavorable,
    Neutral,
}

/// Every metric the history view renders with a trend indicator.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum MetricField {
    Clicks,
    Ctr,
    Cpc,
    LandingViews,
    Leads,
    UniqueLeads,
    CrLanding,
    CostPerLead,
    CostPerUniqueLead,
    Appointments,
    AppointmentRate,
    CostPerAppointment,
}

impl MetricField {
    pub const ALL: [MetricField; 12] = [
        MetricField::Clicks,
        MetricField::Ctr,
        MetricField::Cpc,
        MetricField::LandingViews,
        MetricField::Leads,
        MetricField::UniqueLeads,
        MetricField::CrLanding,
        MetricField::CostPerLead,
        MetricField::CostPerUniqueLead,
        MetricField::Appointments,
        MetricField::AppointmentRate,
        MetricField::CostPerAppointment,
    ];

    pub fn direction(&self) -> MetricDirection {
        match self {
            MetricField::Cpc
            | MetricField::CostPerLead
            | MetricField::CostPerUniqueLead
            | MetricField::CostPerAppointment => MetricDirection::LowerIsBetter,
            _ => MetricDirection::HigherIsBetter,
        }
    }

    /// Numeric value of this metric on a stored week record.
    pub fn value_of(&self, week: &WeekRecord) -> Decimal {
        let text = match self {
            MetricField::Clicks => &week.clicks,
            MetricField::Ctr => &week.ctr,
            MetricField::Cpc => &week.cpc,
            MetricField::LandingViews => &week.landing_views,
            MetricField::Leads => &week.leads,
            MetricField::UniqueLeads => &week.unique_leads,
            MetricField::CrLanding => &week.cr_landing,
            MetricField::CostPerLead => &week.cost_per_lead,
            MetricField::CostPerUniqueLead => &week.cost_per_unique_lead,
            MetricField::Appointments => &week.appointments,
            MetricField::AppointmentRate => &week.appointment_rate,
            MetricField::CostPerAppointment => &week.cost_per_appointment,
        };
        parse_or_zero(text)
    }
}

/// One metric's trend against the previous week. `delta_pct` is absent when
/// there is no previous value to compare against.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    pub field: MetricField,
    pub delta_pct: Option<String>,
    pub sentiment: TrendSentiment,
}

/// Trend indicators for one week of a campaign's history.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeekTrend {
    pub week_number: u32,
    pub metrics: Vec<MetricTrend>,
}
