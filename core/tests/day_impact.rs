//! Per-day aggregation.

use phonecost_core::config::{Scenario, ServerProfile};
use phonecost_core::evaluator::evaluate;
use phonecost_core::types::DayOfWeek;

fn weekend_free_scenario() -> Scenario {
    // Alex works Monday–Friday lunches, Jordan works Thursday/Friday dinners.
    let mut alex = ServerProfile::new("Alex");
    for day in 0..5 {
        alex.hours[day][0] = 4.0;
    }
    let mut jordan = ServerProfile::new("Jordan");
    jordan.hours[3][1] = 6.0;
    jordan.hours[4][1] = 6.0;
    jordan.phone_time_percent = 25.0;
    jordan.tip_percent = 22.0;

    Scenario {
        servers: vec![alex, jordan],
        check_sizes: Default::default(),
        params: Default::default(),
        phone_time: Default::default(),
    }
}

#[test]
fn every_day_gets_a_record() {
    let evaluation = evaluate(&weekend_free_scenario());

    assert_eq!(evaluation.day_impacts.len(), 7);
    let days: Vec<DayOfWeek> = evaluation.day_impacts.iter().map(|d| d.day).collect();
    assert_eq!(days, DayOfWeek::ALL);
}

#[test]
fn unstaffed_days_emit_zero_records() {
    let evaluation = evaluate(&weekend_free_scenario());

    for day in &evaluation.day_impacts[5..] {
        assert_eq!(day.scheduled_hours, 0.0, "{}", day.day.label());
        assert_eq!(day.opportunity_cost, 0.0, "{}", day.day.label());
        assert_eq!(day.components.labor, 0.0);
    }
}

#[test]
fn staffed_days_accumulate_both_servers() {
    let evaluation = evaluate(&weekend_free_scenario());

    let monday = &evaluation.day_impacts[0];
    assert_eq!(monday.scheduled_hours, 4.0, "Alex only");

    let thursday = &evaluation.day_impacts[3];
    assert_eq!(thursday.scheduled_hours, 10.0, "Alex lunch + Jordan dinner");
    assert!(
        thursday.opportunity_cost > monday.opportunity_cost,
        "more staffed hours, more opportunity cost"
    );
}

/// Lost tips follow the day's own check sizes.
#[test]
fn day_check_sizes_drive_lost_tips() {
    let mut scenario = weekend_free_scenario();
    // Same staffing Monday and Tuesday, pricier Monday lunches.
    scenario.check_sizes.lunch[0] = 100.0;
    scenario.check_sizes.lunch[1] = 25.0;
    let evaluation = evaluate(&scenario);

    let monday = &evaluation.day_impacts[0];
    let tuesday = &evaluation.day_impacts[1];
    assert!(
        monday.components.lost_tips > tuesday.components.lost_tips,
        "monday tips {:.2} should exceed tuesday tips {:.2}",
        monday.components.lost_tips,
        tuesday.components.lost_tips
    );
    assert_eq!(
        monday.components.labor, tuesday.components.labor,
        "labor ignores check sizes"
    );
    assert_eq!(
        monday.components.lost_upsell_profit, tuesday.components.lost_upsell_profit,
        "upsell losses ignore check sizes"
    );
}
