//! Per-server opportunity-cost aggregation.
//!
//! Each server is costed with its own wage, phone-time share, and tip
//! rate. The subscription cost is allocated across servers in proportion
//! to their share of the combined weekly hours, so the shares always sum
//! to the full plan price when anyone is scheduled.

use crate::config::Scenario;
use crate::formulas::{
    accumulate_cells, server_cells, with_automation_cost, CostComponents, WEEKS_PER_MONTH,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerImpact {
    pub name: String,
    pub wage: f64,
    pub weekly_hours: f64,
    pub monthly_hours: f64,
    pub components: CostComponents,
    pub cost_without_automation: f64,
    pub cost_with_automation: f64,
    pub savings: f64,
    pub subscription_share: f64,
}

/// One `ServerImpact` per server, order-preserving.
pub fn server_impacts(scenario: &Scenario) -> Vec<ServerImpact> {
    let combined_weekly_hours = scenario.total_weekly_hours();
    // Floor the denominator at 1 so an empty schedule cannot divide by zero.
    let share_denominator = combined_weekly_hours.max(1.0);
    let plan_price = scenario.params.plan.monthly_price();

    scenario
        .servers
        .iter()
        .map(|server| {
            let components = accumulate_cells(
                server_cells(server, &scenario.check_sizes, None),
                &scenario.params,
            );
            let weekly_hours = server.weekly_hours();
            let subscription_share = (weekly_hours / share_denominator) * plan_price;
            let cost_without_automation = components.total();
            let cost_with_automation = with_automation_cost(
                &components,
                scenario.params.coverage_percent,
                subscription_share,
            );

            ServerImpact {
                name: server.name.clone(),
                wage: server.wage,
                weekly_hours,
                monthly_hours: weekly_hours * WEEKS_PER_MONTH,
                components,
                cost_without_automation,
                cost_with_automation,
                savings: cost_without_automation - cost_with_automation,
                subscription_share,
            }
        })
        .collect()
}
