//! Per-day opportunity-cost aggregation.
//!
//! Groups the same cost formulas by day of week: every server's lunch and
//! dinner hours for the day, each server with its own phone-time share and
//! tip rate, against that day's check sizes. Unstaffed days emit a zero
//! record so callers always see seven rows.

use crate::config::Scenario;
use crate::formulas::{accumulate_cells, CostComponents, ShiftCell};
use crate::types::{DayOfWeek, MealPeriod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayImpact {
    pub day: DayOfWeek,
    pub scheduled_hours: f64,
    pub components: CostComponents,
    pub opportunity_cost: f64,
}

impl DayImpact {
    fn zero(day: DayOfWeek) -> Self {
        Self {
            day,
            scheduled_hours: 0.0,
            components: CostComponents::default(),
            opportunity_cost: 0.0,
        }
    }
}

/// One `DayImpact` per day, Monday through Sunday.
pub fn day_impacts(scenario: &Scenario) -> Vec<DayImpact> {
    DayOfWeek::ALL
        .iter()
        .map(|&day| {
            let scheduled_hours: f64 = scenario.servers.iter().map(|s| s.day_hours(day)).sum();
            if scheduled_hours <= 0.0 {
                return DayImpact::zero(day);
            }

            let cells = scenario.servers.iter().flat_map(|server| {
                MealPeriod::ALL.iter().map(move |&meal| ShiftCell {
                    hours: server.hours_for(day, meal),
                    wage: server.wage,
                    phone_time_percent: server.phone_time_percent,
                    tip_percent: server.tip_percent,
                    check_size: scenario.check_sizes.check_size(day, meal),
                })
            });
            let components = accumulate_cells(cells, &scenario.params);

            DayImpact {
                day,
                scheduled_hours,
                opportunity_cost: components.total(),
                components,
            }
        })
        .collect()
}
