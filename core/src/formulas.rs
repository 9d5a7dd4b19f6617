//! Cost-formula primitives.
//!
//! Every aggregation pass (per-server, per-day, per-percentage) feeds its
//! cells through the same `cell_components` function, so the three passes
//! cannot drift apart. A "cell" is one server's hours in one day × meal
//! slot together with the rates that apply to it.

use crate::config::{BusinessParams, CheckSizeTable, ServerProfile};
use crate::types::{DayOfWeek, MealPeriod};
use serde::{Deserialize, Serialize};

/// Average weeks per month used to scale weekly hours to monthly figures.
pub const WEEKS_PER_MONTH: f64 = 4.3;

/// Upsell opportunities missed per hour spent on the phone.
pub const MISSED_UPSELLS_PER_HOUR: f64 = 3.0;

/// Discount on lost-tip estimates: not all phone time fully blocks
/// table service.
pub const MULTITASKING_FACTOR: f64 = 0.7;

/// The three monthly cost components of phone time, always summed into the
/// total opportunity cost with no intermediate rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostComponents {
    pub labor: f64,
    pub lost_upsell_profit: f64,
    pub lost_tips: f64,
}

impl CostComponents {
    pub fn total(&self) -> f64 {
        self.labor + self.lost_upsell_profit + self.lost_tips
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            labor: self.labor * factor,
            lost_upsell_profit: self.lost_upsell_profit * factor,
            lost_tips: self.lost_tips * factor,
        }
    }

    pub fn add(&mut self, other: &Self) {
        self.labor += other.labor;
        self.lost_upsell_profit += other.lost_upsell_profit;
        self.lost_tips += other.lost_tips;
    }
}

/// One scheduled cell as seen by the cost formulas.
#[derive(Debug, Clone, Copy)]
pub struct ShiftCell {
    pub hours: f64,
    pub wage: f64,
    pub phone_time_percent: f64,
    pub tip_percent: f64,
    pub check_size: f64,
}

/// Monthly hours spent on the phone for a weekly hours quantity.
pub fn phone_hours_per_month(weekly_hours: f64, phone_time_percent: f64) -> f64 {
    weekly_hours * (phone_time_percent / 100.0) * WEEKS_PER_MONTH
}

/// Monthly cost components for a single cell.
pub fn cell_components(cell: &ShiftCell, params: &BusinessParams) -> CostComponents {
    if cell.hours <= 0.0 {
        return CostComponents::default();
    }

    let phone_hours = phone_hours_per_month(cell.hours, cell.phone_time_percent);

    let labor = phone_hours * cell.wage;

    let missed_upsells = phone_hours * MISSED_UPSELLS_PER_HOUR;
    let lost_upsell_profit =
        missed_upsells * params.upsell_value * (params.upsell_margin_percent / 100.0);

    let tables_not_served = phone_hours * params.tables_per_hour * MULTITASKING_FACTOR;
    let lost_tips = tables_not_served * cell.check_size * (cell.tip_percent / 100.0);

    CostComponents {
        labor,
        lost_upsell_profit,
        lost_tips,
    }
}

/// Sum the components of a stream of cells.
pub fn accumulate_cells(
    cells: impl IntoIterator<Item = ShiftCell>,
    params: &BusinessParams,
) -> CostComponents {
    let mut acc = CostComponents::default();
    for cell in cells {
        acc.add(&cell_components(&cell, params));
    }
    acc
}

/// All 14 cells of one server's schedule, check sizes looked up per
/// day/meal. `phone_override` substitutes a scanned percentage for the
/// server's own phone-time share (the sensitivity axis); wages, tip rates,
/// and hours always stay per-server.
pub fn server_cells<'a>(
    server: &'a ServerProfile,
    check_sizes: &'a CheckSizeTable,
    phone_override: Option<f64>,
) -> impl Iterator<Item = ShiftCell> + 'a {
    DayOfWeek::ALL.iter().flat_map(move |&day| {
        MealPeriod::ALL.iter().map(move |&meal| ShiftCell {
            hours: server.hours_for(day, meal),
            wage: server.wage,
            phone_time_percent: phone_override.unwrap_or(server.phone_time_percent),
            tip_percent: server.tip_percent,
            check_size: check_sizes.check_size(day, meal),
        })
    })
}

/// Monthly cost once automation absorbs `coverage_percent` of the phone
/// work: each component shrinks by the coverage fraction, then the
/// subscription cost (full price or an allocated share) is added on top.
pub fn with_automation_cost(
    components: &CostComponents,
    coverage_percent: f64,
    subscription_cost: f64,
) -> f64 {
    components.scaled(1.0 - coverage_percent / 100.0).total() + subscription_cost
}
