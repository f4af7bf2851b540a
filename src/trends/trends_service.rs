use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use super::trends_model::{MetricDirection, MetricField, MetricTrend, TrendSentiment, WeekTrend};
use crate::campaigns::WeekRecord;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Computes week-over-week percentage deltas and their polarity.
pub struct TrendService;

impl TrendService {
    pub fn new() -> Self {
        TrendService
    }

    /// Percentage change from `previous` to `current`, rounded to 2 places.
    ///
    /// Returns `None` when there is no previous value or it is exactly zero:
    /// "no trend available", which is distinct from a 0% change.
    pub fn delta(&self, current: Decimal, previous: Option<Decimal>) -> Option<Decimal> {
        let previous = previous?;
        if previous.is_zero() {
            return None;
        }
        let delta = (current - previous) / previous * Decimal::from(100);
        Some(delta.round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Classifies a delta against the metric's direction. An increase is
    /// favorable for volume/rate metrics and unfavorable for cost metrics;
    /// zero or absent deltas are neutral.
    pub fn classify(
        &self,
        delta: Option<Decimal>,
        direction: MetricDirection,
    ) -> TrendSentiment {
        let delta = match delta {
            Some(d) if !d.is_zero() => d,
            _ => return TrendSentiment::Neutral,
        };
        let rising = delta > Decimal::zero();
        match direction {
            MetricDirection::HigherIsBetter if rising => TrendSentiment::Favorable,
            MetricDirection::HigherIsBetter => TrendSentiment::Unfavorable,
            MetricDirection::LowerIsBetter if rising => TrendSentiment::Unfavorable,
            MetricDirection::LowerIsBetter => TrendSentiment::Favorable,
        }
    }

    /// Pairwise trend indicators across consecutive stored weeks, in the
    /// order the history view renders them. The first week has no previous
    /// week, so all its deltas are absent and neutral.
    pub fn week_over_week(&self, weeks: &[WeekRecord]) -> Vec<WeekTrend> {
        weeks
            .iter()
            .enumerate()
            .map(|(index, week)| {
                let previous = index.checked_sub(1).map(|i| &weeks[i]);
                let metrics = MetricField::ALL
                    .iter()
                    .map(|field| {
                        let delta = self.delta(
                            field.value_of(week),
                            previous.map(|p| field.value_of(p)),
                        );
                        MetricTrend {
                            field: *field,
                            delta_pct: delta.map(|d| format!("{:.2}", d)),
                            sentiment: self.classify(delta, field.direction()),
                        }
                    })
                    .collect();
                WeekTrend {
                    week_number: week.week_number,
                    metrics,
                }
            })
            .collect()
    }
}

impl Default for TrendService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn delta_computes_percent_change() {
        let service = TrendService::new();
        assert_eq!(service.delta(dec!(110), Some(dec!(100))), Some(dec!(10.00)));
        assert_eq!(service.delta(dec!(90), Some(dec!(100))), Some(dec!(-10.00)));
        assert_eq!(service.delta(dec!(25), Some(dec!(150))), Some(dec!(-83.33)));
    }

    #[test]
    fn delta_is_absent_without_a_usable_previous_value() {
        let service = TrendService::new();
        assert_eq!(service.delta(dec!(110), None), None);
        assert_eq!(service.delta(dec!(110), Some(Decimal::ZERO)), None);
    }

    #[test]
    fn rising_value_polarity_follows_metric_direction() {
        let service = TrendService::new();
        let delta = service.delta(dec!(110), Some(dec!(100)));

        assert_eq!(
            service.classify(delta, MetricDirection::HigherIsBetter),
            TrendSentiment::Favorable
        );
        assert_eq!(
            service.classify(delta, MetricDirection::LowerIsBetter),
            TrendSentiment::Unfavorable
        );
    }

    #[test]
    fn falling_cost_is_favorable() {
        let service = TrendService::new();
        let delta = service.delta(dec!(90), Some(dec!(100)));

        assert_eq!(
            service.classify(delta, MetricDirection::LowerIsBetter),
            TrendSentiment::Favorable
        );
        assert_eq!(
            service.classify(delta, MetricDirection::HigherIsBetter),
            TrendSentiment::Unfavorable
        );
    }

    #[test]
    fn zero_or_absent_delta_is_neutral() {
        let service = TrendService::new();
        assert_eq!(
            service.classify(Some(Decimal::ZERO), MetricDirection::LowerIsBetter),
            TrendSentiment::Neutral
        );
        assert_eq!(
            service.classify(None, MetricDirection::HigherIsBetter),
            TrendSentiment::Neutral
        );
    }

    #[test]
    fn first_week_has_no_trend() {
        let weeks = vec![
            WeekRecord {
                week_number: 1,
                leads: "100".to_string(),
                ..Default::default()
            },
            WeekRecord {
                week_number: 2,
                leads: "110".to_string(),
                ..Default::default()
            },
        ];
        let trends = TrendService::new().week_over_week(&weeks);

        assert_eq!(trends.len(), 2);
        assert!(trends[0].metrics.iter().all(|m| m.delta_pct.is_none()
            && m.sentiment == TrendSentiment::Neutral));

        let leads_trend = trends[1]
            .metrics
            .iter()
            .find(|m| m.field == MetricField::Leads)
            .unwrap();
        assert_eq!(leads_trend.delta_pct.as_deref(), Some("10.00"));
        assert_eq!(leads_trend.sentiment, TrendSentiment::Favorable);
    }
}
