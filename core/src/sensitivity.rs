//! Sensitivity-curve generation — cost as a function of phone-time share.
//!
//! One point per integer percent across the realistic range of phone-time
//! shares. Each point is computed as if every server spent that share of
//! their shift on the phone; wages, tip rates, schedules, and check sizes
//! stay per-server. The curve carries the flat plan price (allocation
//! across servers only matters for the per-server view).

use crate::config::Scenario;
use crate::formulas::{accumulate_cells, server_cells, with_automation_cost, CostComponents};
use serde::{Deserialize, Serialize};

/// Scanned phone-time range, inclusive on both ends.
pub const SCAN_MIN_PERCENT: u32 = 5;
pub const SCAN_MAX_PERCENT: u32 = 25;

/// Tolerance when matching the selected percent to a curve point.
pub const OPERATING_POINT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub phone_time_percent: f64,
    pub components: CostComponents,
    pub cost_without_automation: f64,
    pub cost_with_automation: f64,
    pub savings: f64,
}

/// The full curve, 21 points from 5% to 25%.
pub fn sensitivity_curve(scenario: &Scenario) -> Vec<SensitivityPoint> {
    let plan_price = scenario.params.plan.monthly_price();

    (SCAN_MIN_PERCENT..=SCAN_MAX_PERCENT)
        .map(|p| {
            let percent = f64::from(p);
            let mut components = CostComponents::default();
            for server in &scenario.servers {
                components.add(&accumulate_cells(
                    server_cells(server, &scenario.check_sizes, Some(percent)),
                    &scenario.params,
                ));
            }
            let cost_without_automation = components.total();
            let cost_with_automation =
                with_automation_cost(&components, scenario.params.coverage_percent, plan_price);

            SensitivityPoint {
                phone_time_percent: percent,
                components,
                cost_without_automation,
                cost_with_automation,
                savings: cost_without_automation - cost_with_automation,
            }
        })
        .collect()
}

/// Locate the curve point for the selected percent. `None` when the
/// selected percent falls outside the scanned range.
pub fn operating_point(curve: &[SensitivityPoint], percent: f64) -> Option<&SensitivityPoint> {
    curve
        .iter()
        .find(|point| (point.phone_time_percent - percent).abs() < OPERATING_POINT_TOLERANCE)
}
