use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use super::aggregation_errors::AggregationError;
use crate::campaigns::WeekRecord;
use crate::errors::Result;
use crate::utils::{format_count, format_fixed2, parse_or_zero, ratio_display};

/// Running totals over the flattened cross-campaign week list.
#[derive(Default)]
struct Totals {
    budget: Decimal,
    clicks: Decimal,
    landing_views: Decimal,
    leads: Decimal,
    unique_leads: Decimal,
    appointments: Decimal,
    ctr: Decimal,
    cpc: Decimal,
    cost_per_lead: Decimal,
    cost_per_unique_lead: Decimal,
    cr_landing: Decimal,
    appointment_rate: Decimal,
}

impl Totals {
    fn add_week(&mut self, week: &WeekRecord) {
        // Extensive quantities: summed
        self.budget += parse_or_zero(&week.budget);
        self.clicks += parse_or_zero(&week.clicks);
        self.landing_views += parse_or_zero(&week.landing_views);
        self.leads += parse_or_zero(&week.leads);
        self.unique_leads += parse_or_zero(&week.unique_leads);
        self.appointments += parse_or_zero(&week.appointments);
        // Intensive quantities: summed here, divided by week count later
        self.ctr += parse_or_zero(&week.ctr);
        self.cpc += parse_or_zero(&week.cpc);
        self.cost_per_lead += parse_or_zero(&week.cost_per_lead);
        self.cost_per_unique_lead += parse_or_zero(&week.cost_per_unique_lead);
        self.cr_landing += parse_or_zero(&week.cr_landing);
        self.appointment_rate += parse_or_zero(&week.appointment_rate);
    }
}

/// Rolls multiple campaigns' week histories into one synthetic week record.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        AggregationService
    }

    /// Reduces the flattened week list into a single synthetic WeekRecord.
    ///
    /// Extensive fields are summed; rate/unit-cost fields are the plain
    /// arithmetic mean over the week count (not volume-weighted). The one
    /// exception is cost-per-appointment, which is recomputed from the
    /// summed totals rather than averaged — documented source behavior,
    /// kept as-is.
    pub fn aggregate(&self, weeks: &[WeekRecord], name: &str, period: &str) -> Result<WeekRecord> {
        if weeks.is_empty() {
            return Err(AggregationError::EmptyInput.into());
        }

        debug!("Aggregating {} weeks into '{}'", weeks.len(), name);

        let mut totals = Totals::default();
        for week in weeks {
            totals.add_week(week);
        }
        let count = Decimal::from(weeks.len() as u64);

        // Recomputed from the summed totals; ratio_display guards the
        // zero-appointments case.
        let cost_per_appointment = ratio_display(totals.budget, totals.appointments);

        Ok(WeekRecord {
            week_reference: period.to_string(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            ctr: format_fixed2(totals.ctr / count),
            budget: format_fixed2(totals.budget),
            landing_views: format_count(totals.landing_views),
            clicks: format_count(totals.clicks),
            leads: format_count(totals.leads),
            unique_leads: format_count(totals.unique_leads),
            appointments: format_count(totals.appointments),
            cpc: format_fixed2(totals.cpc / count),
            week_number: 1,
            cost_per_lead: format_fixed2(totals.cost_per_lead / count),
            cost_per_unique_lead: format_fixed2(totals.cost_per_unique_lead / count),
            cost_per_appointment,
            cr_landing: format_fixed2(totals.cr_landing / count),
            appointment_rate: format_fixed2(totals.appointment_rate / count),
            is_aggregate: true,
            source_campaigns: Vec::new(),
        })
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
