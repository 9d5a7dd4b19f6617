//! Weighted phone-time estimation and hysteresis reconciliation.

use phonecost_core::config::ServerProfile;
use phonecost_core::phone_time::{weighted_phone_time, PhoneTimeSetting};

fn server_with(name: &str, weekly_hours: f64, phone_time_percent: f64) -> ServerProfile {
    let mut server = ServerProfile::new(name);
    // Spread the hours over dinner shifts; the estimator only sees totals.
    server.hours[0][1] = weekly_hours.min(12.0);
    let mut remaining = weekly_hours - server.hours[0][1];
    let mut day = 1;
    while remaining > 0.0 && day < 7 {
        server.hours[day][1] = remaining.min(12.0);
        remaining -= server.hours[day][1];
        day += 1;
    }
    server.phone_time_percent = phone_time_percent;
    server
}

#[test]
fn estimate_is_weighted_by_scheduled_hours() {
    let servers = vec![
        server_with("Alex", 40.0, 10.0),
        server_with("Jordan", 20.0, 25.0),
    ];

    // (10 × 40 + 25 × 20) / 60 = 15
    assert_eq!(weighted_phone_time(&servers), 15.0);
}

#[test]
fn estimate_rounds_to_the_nearest_integer_percent() {
    let servers = vec![
        server_with("Alex", 30.0, 10.0),
        server_with("Jordan", 30.0, 15.0),
    ];

    // 12.5 rounds away from zero; the curve is sampled at integers.
    assert_eq!(weighted_phone_time(&servers), 13.0);
}

#[test]
fn estimate_defaults_to_fifteen_without_scheduled_hours() {
    assert_eq!(weighted_phone_time(&[]), 15.0);

    let unscheduled = vec![
        ServerProfile::new("Alex"),
        ServerProfile::new("Jordan"),
    ];
    assert_eq!(weighted_phone_time(&unscheduled), 15.0);
}

#[test]
fn reconcile_holds_within_one_percentage_point() {
    let setting = PhoneTimeSetting::override_to(15.0);

    assert_eq!(setting.reconcile(15.8), setting, "within hysteresis band");
    assert_eq!(setting.reconcile(16.0), setting, "exactly at the threshold");
    assert_eq!(setting.reconcile(14.2), setting, "band is symmetric");
}

#[test]
fn reconcile_adopts_a_diverged_estimate() {
    let setting = PhoneTimeSetting::override_to(15.0);

    assert_eq!(
        setting.reconcile(17.0),
        PhoneTimeSetting::Derived(17.0),
        "a diverged estimate replaces even a manual override"
    );

    let derived = PhoneTimeSetting::Derived(15.0);
    assert_eq!(derived.reconcile(12.0), PhoneTimeSetting::Derived(12.0));
}
