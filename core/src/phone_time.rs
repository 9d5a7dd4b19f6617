//! Weighted phone-time estimation and the derived/overridden setting.
//!
//! The evaluation point on the sensitivity curve is either derived from the
//! schedule (hours-weighted mean of per-server phone-time shares) or set
//! manually by the user. Reconciliation adopts a fresh estimate only when
//! it moves more than one percentage point away from the current value, so
//! small schedule edits do not fight a manual override back and forth.

use crate::config::{ServerProfile, DEFAULT_PHONE_TIME_PERCENT};
use serde::{Deserialize, Serialize};

/// Minimum distance, in percentage points, before a fresh estimate
/// replaces the current evaluation point.
pub const HYSTERESIS_POINTS: f64 = 1.0;

/// Schedule-hours-weighted average phone-time share across all servers,
/// rounded to the nearest integer percent (the sensitivity curve is
/// sampled at integer percents). Falls back to the default share when
/// there are no servers or no scheduled hours.
pub fn weighted_phone_time(servers: &[ServerProfile]) -> f64 {
    let total_hours: f64 = servers.iter().map(ServerProfile::weekly_hours).sum();
    if servers.is_empty() || total_hours <= 0.0 {
        return DEFAULT_PHONE_TIME_PERCENT;
    }
    let weighted_sum: f64 = servers
        .iter()
        .map(|s| s.phone_time_percent * s.weekly_hours())
        .sum();
    (weighted_sum / total_hours).round()
}

/// The evaluation point, tracked as an explicit two-state value rather
/// than implicit recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "percent", rename_all = "snake_case")]
pub enum PhoneTimeSetting {
    /// Derived from the schedule by `weighted_phone_time`.
    Derived(f64),
    /// Set manually by the user.
    Overridden(f64),
}

impl Default for PhoneTimeSetting {
    fn default() -> Self {
        PhoneTimeSetting::Derived(DEFAULT_PHONE_TIME_PERCENT)
    }
}

impl PhoneTimeSetting {
    pub fn override_to(percent: f64) -> Self {
        PhoneTimeSetting::Overridden(percent)
    }

    pub fn percent(self) -> f64 {
        match self {
            PhoneTimeSetting::Derived(p) | PhoneTimeSetting::Overridden(p) => p,
        }
    }

    /// Run on every input change: adopt the fresh estimate only when it
    /// differs from the current value by more than the hysteresis
    /// threshold. An adopted estimate replaces a manual override.
    pub fn reconcile(self, estimate: f64) -> Self {
        if (estimate - self.percent()).abs() > HYSTERESIS_POINTS {
            PhoneTimeSetting::Derived(estimate)
        } else {
            self
        }
    }
}
