//! phonecost-core — deterministic cost model for restaurant phone handling.
//!
//! Given a staffing schedule, wage data, and call-handling behavior, the
//! model computes the monthly opportunity cost of servers answering the
//! phone versus an automated answering service: labor cost, lost upsell
//! profit, lost tips, per-server and per-day aggregations, a sensitivity
//! curve over phone-time share, and ROI/payback summary metrics.
//!
//! Entry point: [`evaluator::evaluate`] on a [`config::Scenario`].

pub mod config;
pub mod day_impact;
pub mod error;
pub mod evaluator;
pub mod formulas;
pub mod phone_time;
pub mod sensitivity;
pub mod server_impact;
pub mod summary;
pub mod types;
