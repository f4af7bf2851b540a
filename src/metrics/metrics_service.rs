use log::debug;

use crate::campaigns::{NewWeek, WeekRecord};
use crate::utils::{parse_or_zero, percentage_display, ratio_display};

/// Derives the standard marketing-efficiency ratios for one week of raw
/// input. Pure and infallible: malformed numeric text degrades to zero and
/// lands in the divide-by-zero guards.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        MetricsService
    }

    /// Enriches one week of raw input with the five derived ratios and its
    /// sequence position. The sequence number is caller-supplied as
    /// `current week count + 1`; this service keeps no state.
    pub fn derive_week(&self, raw: &NewWeek, sequence_number: u32) -> WeekRecord {
        let budget = parse_or_zero(&raw.budget);
        let leads = parse_or_zero(&raw.leads);
        let unique_leads = parse_or_zero(&raw.unique_leads);
        let appointments = parse_or_zero(&raw.appointments);
        let landing_views = parse_or_zero(&raw.landing_views);

        debug!(
            "Deriving week {} metrics: budget={}, leads={}",
            sequence_number, budget, leads
        );

        WeekRecord {
            week_reference: raw.week_reference.clone(),
            date: raw.date.clone(),
            ctr: raw.ctr.clone(),
            budget: raw.budget.clone(),
            landing_views: raw.landing_views.clone(),
            clicks: raw.clicks.clone(),
            leads: raw.leads.clone(),
            unique_leads: raw.unique_leads.clone(),
            appointments: raw.appointments.clone(),
            cpc: raw.cpc.clone(),
            week_number: sequence_number,
            cost_per_lead: ratio_display(budget, leads),
            cost_per_unique_lead: ratio_display(budget, unique_leads),
            cost_per_appointment: ratio_display(budget, appointments),
            cr_landing: percentage_display(leads, landing_views),
            appointment_rate: percentage_display(appointments, leads),
            is_aggregate: false,
            source_campaigns: Vec::new(),
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
