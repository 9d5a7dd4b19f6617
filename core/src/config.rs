//! Scenario configuration — servers, check sizes, and business parameters.
//!
//! A scenario is an immutable snapshot supplied by the caller for a single
//! evaluation. Malformed numeric input never fails: out-of-range values are
//! clamped to their documented bounds and non-finite values fall back to the
//! documented defaults. The only fallible operations here are loading and
//! deserializing a scenario file.

use crate::error::CostResult;
use crate::phone_time::PhoneTimeSetting;
use crate::types::{DayOfWeek, MealPeriod};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WAGE: f64 = 4.74;
pub const DEFAULT_TIP_PERCENT: f64 = 18.0;
pub const DEFAULT_PHONE_TIME_PERCENT: f64 = 15.0;

pub const WAGE_BOUNDS: (f64, f64) = (2.13, 15.0);
pub const PHONE_TIME_BOUNDS: (f64, f64) = (0.0, 50.0);
pub const TIP_BOUNDS: (f64, f64) = (0.0, 30.0);
pub const CELL_HOURS_BOUNDS: (f64, f64) = (0.0, 12.0);
pub const UPSELL_MARGIN_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const NET_PROFIT_BOUNDS: (f64, f64) = (0.0, 50.0);
pub const COVERAGE_BOUNDS: (f64, f64) = (0.0, 100.0);

/// Clamp to bounds. NaN takes the fallback; infinities clamp to the
/// nearest bound like any other out-of-range value.
fn clamp_or(value: f64, bounds: (f64, f64), fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(bounds.0, bounds.1)
    }
}

/// Non-negative with a fallback for non-finite input. Used for fields
/// with no upper bound, where an infinity has no bound to clamp to.
fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}

/// One server's wage, call behavior, and weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerProfile {
    pub name: String,
    #[serde(default = "default_wage")]
    pub wage: f64,
    #[serde(default = "default_phone_time")]
    pub phone_time_percent: f64,
    #[serde(default = "default_tip")]
    pub tip_percent: f64,
    /// Scheduled hours, `hours[day][meal]`: Monday-first rows,
    /// lunch then dinner columns. Each cell is bounded [0, 12].
    #[serde(default)]
    pub hours: [[f64; 2]; 7],
}

fn default_wage() -> f64 {
    DEFAULT_WAGE
}

fn default_phone_time() -> f64 {
    DEFAULT_PHONE_TIME_PERCENT
}

fn default_tip() -> f64 {
    DEFAULT_TIP_PERCENT
}

impl ServerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wage: DEFAULT_WAGE,
            phone_time_percent: DEFAULT_PHONE_TIME_PERCENT,
            tip_percent: DEFAULT_TIP_PERCENT,
            hours: [[0.0; 2]; 7],
        }
    }

    pub fn hours_for(&self, day: DayOfWeek, meal: MealPeriod) -> f64 {
        self.hours[day.index()][meal.index()]
    }

    /// Lunch + dinner hours for one day.
    pub fn day_hours(&self, day: DayOfWeek) -> f64 {
        let row = self.hours[day.index()];
        row[0] + row[1]
    }

    /// Total scheduled hours across all day × meal cells.
    pub fn weekly_hours(&self) -> f64 {
        self.hours.iter().map(|row| row[0] + row[1]).sum()
    }

    pub fn sanitized(&self) -> Self {
        let mut hours = self.hours;
        for row in &mut hours {
            for cell in row.iter_mut() {
                *cell = clamp_or(*cell, CELL_HOURS_BOUNDS, 0.0);
            }
        }
        Self {
            name: self.name.clone(),
            wage: clamp_or(self.wage, WAGE_BOUNDS, DEFAULT_WAGE),
            phone_time_percent: clamp_or(
                self.phone_time_percent,
                PHONE_TIME_BOUNDS,
                DEFAULT_PHONE_TIME_PERCENT,
            ),
            tip_percent: clamp_or(self.tip_percent, TIP_BOUNDS, DEFAULT_TIP_PERCENT),
            hours,
        }
    }
}

/// Average transaction value per day and meal period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSizeTable {
    pub lunch: [f64; 7],
    pub dinner: [f64; 7],
}

impl Default for CheckSizeTable {
    fn default() -> Self {
        Self {
            lunch: [25.0; 7],
            dinner: [35.0; 7],
        }
    }
}

impl CheckSizeTable {
    pub fn check_size(&self, day: DayOfWeek, meal: MealPeriod) -> f64 {
        match meal {
            MealPeriod::Lunch => self.lunch[day.index()],
            MealPeriod::Dinner => self.dinner[day.index()],
        }
    }

    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        for cell in out.lunch.iter_mut().chain(out.dinner.iter_mut()) {
            *cell = non_negative_or(*cell, 0.0);
        }
        out
    }
}

/// Subscription tier of the automated phone-answering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    NoSubscription,
    Core,
    Premium,
}

impl PlanTier {
    pub fn monthly_price(self) -> f64 {
        match self {
            PlanTier::NoSubscription => 0.0,
            PlanTier::Core => 399.0,
            PlanTier::Premium => 599.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanTier::NoSubscription => "No Subscription",
            PlanTier::Core => "Core Plan",
            PlanTier::Premium => "Premium Plan",
        }
    }
}

/// Restaurant-wide service, revenue, and automation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessParams {
    #[serde(default = "default_tables_per_hour")]
    pub tables_per_hour: f64,
    #[serde(default = "default_upsell_value")]
    pub upsell_value: f64,
    #[serde(default = "default_upsell_margin")]
    pub upsell_margin_percent: f64,
    #[serde(default = "default_net_profit")]
    pub net_profit_percent: f64,
    /// Fraction of calls the automation service would absorb.
    #[serde(default = "default_coverage")]
    pub coverage_percent: f64,
    #[serde(default = "default_plan")]
    pub plan: PlanTier,
}

fn default_tables_per_hour() -> f64 {
    3.0
}

fn default_upsell_value() -> f64 {
    10.0
}

fn default_upsell_margin() -> f64 {
    50.0
}

fn default_net_profit() -> f64 {
    15.0
}

fn default_coverage() -> f64 {
    70.0
}

fn default_plan() -> PlanTier {
    PlanTier::Core
}

impl Default for BusinessParams {
    fn default() -> Self {
        Self {
            tables_per_hour: default_tables_per_hour(),
            upsell_value: default_upsell_value(),
            upsell_margin_percent: default_upsell_margin(),
            net_profit_percent: default_net_profit(),
            coverage_percent: default_coverage(),
            plan: default_plan(),
        }
    }
}

impl BusinessParams {
    pub fn coverage_fraction(&self) -> f64 {
        self.coverage_percent / 100.0
    }

    pub fn sanitized(&self) -> Self {
        Self {
            tables_per_hour: non_negative_or(self.tables_per_hour, default_tables_per_hour()),
            upsell_value: non_negative_or(self.upsell_value, default_upsell_value()),
            upsell_margin_percent: clamp_or(
                self.upsell_margin_percent,
                UPSELL_MARGIN_BOUNDS,
                default_upsell_margin(),
            ),
            net_profit_percent: clamp_or(
                self.net_profit_percent,
                NET_PROFIT_BOUNDS,
                default_net_profit(),
            ),
            coverage_percent: clamp_or(self.coverage_percent, COVERAGE_BOUNDS, default_coverage()),
            plan: self.plan,
        }
    }
}

/// The full input snapshot for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub servers: Vec<ServerProfile>,
    #[serde(default)]
    pub check_sizes: CheckSizeTable,
    #[serde(default)]
    pub params: BusinessParams,
    /// The evaluation point on the sensitivity curve.
    #[serde(default)]
    pub phone_time: PhoneTimeSetting,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> CostResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CostResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Combined weekly scheduled hours of every server.
    pub fn total_weekly_hours(&self) -> f64 {
        self.servers.iter().map(ServerProfile::weekly_hours).sum()
    }

    /// Clamp every numeric field to its documented bounds; NaN and other
    /// malformed values take the documented defaults. Evaluation always
    /// runs on the sanitized snapshot, so no input combination can
    /// produce a non-finite result.
    pub fn sanitized(&self) -> Self {
        Self {
            servers: self.servers.iter().map(ServerProfile::sanitized).collect(),
            check_sizes: self.check_sizes.sanitized(),
            params: self.params.sanitized(),
            phone_time: self.phone_time,
        }
    }
}
