//! Summary metrics and the cost/gain breakdown at the operating point.
//!
//! Everything here derives from the sensitivity-curve point matching the
//! selected phone-time share plus a handful of fixed business assumptions
//! (reservation volume, conversion, retention). Display formatting is the
//! caller's concern; payback is a sentinel enum, never a runtime failure.

use crate::config::Scenario;
use crate::formulas::phone_hours_per_month;
use crate::sensitivity::SensitivityPoint;
use serde::{Deserialize, Serialize};

/// Opportunity cost of reduced face-to-face service, $ per phone hour.
pub const LOST_CUSTOMER_TIME_RATE: f64 = 15.0;

/// Reservations successfully taken per hour of phone handling.
pub const RESERVATIONS_PER_PHONE_HOUR: f64 = 0.7;

/// Average value of a phone reservation.
pub const AVG_RESERVATION_VALUE: f64 = 120.0;

/// Fraction of phone reservations that convert to a visit.
pub const RESERVATION_CONVERSION_RATE: f64 = 0.4;

/// Fraction of phone-originated revenue attributed to retention.
pub const RETENTION_VALUE_FRACTION: f64 = 0.2;

/// Months until the subscription pays for itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "months", rename_all = "snake_case")]
pub enum Payback {
    /// Savings are zero or negative; the subscription never pays back.
    NotApplicable,
    /// Nothing to recover (no subscription cost).
    Immediate,
    UnderOneMonth,
    Months(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactKind {
    Cost,
    Gain,
}

/// One named line item in the cost/benefit breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactItem {
    pub name: &'static str,
    pub value: f64,
    pub kind: ImpactKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub phone_time_percent: f64,
    pub cost_without_automation: f64,
    pub cost_with_automation: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub annual_subscription_cost: f64,
    pub roi_percent: f64,
    pub payback: Payback,
    pub phone_hours_per_month: f64,
    pub hours_reclaimed: f64,
}

pub fn payback_period(plan_price: f64, monthly_savings: f64) -> Payback {
    if monthly_savings <= 0.0 {
        return Payback::NotApplicable;
    }
    let months = plan_price / monthly_savings;
    if months <= 0.0 {
        Payback::Immediate
    } else if months <= 1.0 {
        Payback::UnderOneMonth
    } else {
        Payback::Months(months)
    }
}

/// Scalar metrics for the current operating point. A selected percent
/// outside the scanned range has no curve point; its cost figures read
/// as zero while the hour-based figures still reflect the schedule.
pub fn summarize(scenario: &Scenario, operating: Option<&SensitivityPoint>) -> Summary {
    let phone_time_percent = scenario.phone_time.percent();
    let plan_price = scenario.params.plan.monthly_price();

    let phone_hours = phone_hours_per_month(scenario.total_weekly_hours(), phone_time_percent);

    let cost_without_automation = operating.map_or(0.0, |p| p.cost_without_automation);
    let cost_with_automation = operating.map_or(0.0, |p| p.cost_with_automation);
    let monthly_savings = cost_without_automation - cost_with_automation;

    let annual_savings = monthly_savings * 12.0;
    let annual_subscription_cost = plan_price * 12.0;
    let roi_percent = if annual_subscription_cost > 0.0 {
        (annual_savings / annual_subscription_cost) * 100.0
    } else {
        0.0
    };

    Summary {
        phone_time_percent,
        cost_without_automation,
        cost_with_automation,
        monthly_savings,
        annual_savings,
        annual_subscription_cost,
        roi_percent,
        payback: payback_period(plan_price, monthly_savings),
        phone_hours_per_month: phone_hours,
        hours_reclaimed: phone_hours * scenario.params.coverage_fraction(),
    }
}

/// Named cost and gain line items for the current operating point. Empty
/// when the selected percent has no curve point.
///
/// Lost tips appears exactly as the cost formulas computed it; the
/// multitasking discount is applied once, inside the tip formula.
pub fn impact_breakdown(
    scenario: &Scenario,
    operating: Option<&SensitivityPoint>,
    phone_hours: f64,
) -> Vec<ImpactItem> {
    let Some(point) = operating else {
        return Vec::new();
    };

    let phone_revenue = phone_hours
        * RESERVATIONS_PER_PHONE_HOUR
        * AVG_RESERVATION_VALUE
        * RESERVATION_CONVERSION_RATE;
    let phone_net_profit = phone_revenue * (scenario.params.net_profit_percent / 100.0);
    let retention_value = phone_revenue * RETENTION_VALUE_FRACTION;
    let net_automation_impact = point.cost_without_automation - point.cost_with_automation;

    vec![
        ImpactItem {
            name: "Direct Labor Cost",
            value: point.components.labor,
            kind: ImpactKind::Cost,
        },
        ImpactItem {
            name: "Lost Upsell Profit",
            value: point.components.lost_upsell_profit,
            kind: ImpactKind::Cost,
        },
        ImpactItem {
            name: "Lost Server Tips",
            value: point.components.lost_tips,
            kind: ImpactKind::Cost,
        },
        ImpactItem {
            name: "Lost Customer Time Value",
            value: phone_hours * LOST_CUSTOMER_TIME_RATE,
            kind: ImpactKind::Cost,
        },
        ImpactItem {
            name: "Phone Revenue Profit",
            value: phone_net_profit,
            kind: ImpactKind::Gain,
        },
        ImpactItem {
            name: "Customer Retention",
            value: retention_value,
            kind: ImpactKind::Gain,
        },
        ImpactItem {
            name: "Automation Net Impact",
            value: net_automation_impact,
            kind: ImpactKind::Gain,
        },
    ]
}
