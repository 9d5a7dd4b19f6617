//! Top-level evaluation — one pure pass over a scenario.
//!
//! `evaluate` is deterministic and side-effect free: identical inputs
//! always yield identical outputs. The caller owns the scenario and
//! re-runs the evaluator on every input change.

use crate::config::Scenario;
use crate::day_impact::{day_impacts, DayImpact};
use crate::sensitivity::{operating_point, sensitivity_curve, SensitivityPoint};
use crate::server_impact::{server_impacts, ServerImpact};
use crate::summary::{impact_breakdown, summarize, ImpactItem, Summary};
use serde::Serialize;

/// Everything a caller needs for display.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub summary: Summary,
    pub server_impacts: Vec<ServerImpact>,
    pub sensitivity: Vec<SensitivityPoint>,
    pub day_impacts: Vec<DayImpact>,
    pub breakdown: Vec<ImpactItem>,
}

/// Evaluate one scenario snapshot. The input is sanitized first (clamp
/// out-of-range values, substitute defaults for malformed ones), so every
/// input combination produces a finite, displayable output.
pub fn evaluate(scenario: &Scenario) -> Evaluation {
    let scenario = scenario.sanitized();

    let server_impacts = server_impacts(&scenario);
    let sensitivity = sensitivity_curve(&scenario);
    let day_impacts = day_impacts(&scenario);

    let selected = scenario.phone_time.percent();
    let operating = operating_point(&sensitivity, selected);
    if operating.is_none() {
        log::warn!("selected phone time {selected}% is outside the scanned 5-25% range");
    }

    let summary = summarize(&scenario, operating);
    let breakdown = impact_breakdown(&scenario, operating, summary.phone_hours_per_month);

    log::debug!(
        "evaluated {} servers at {selected}%: without=${:.2} with=${:.2} savings=${:.2}",
        scenario.servers.len(),
        summary.cost_without_automation,
        summary.cost_with_automation,
        summary.monthly_savings
    );

    Evaluation {
        summary,
        server_impacts,
        sensitivity,
        day_impacts,
        breakdown,
    }
}
