//! Summary metrics: ROI, payback sentinels, reclaimed hours, breakdown.

use phonecost_core::config::{PlanTier, Scenario, ServerProfile};
use phonecost_core::evaluator::evaluate;
use phonecost_core::summary::{
    ImpactKind, Payback, AVG_RESERVATION_VALUE, RESERVATIONS_PER_PHONE_HOUR,
    RESERVATION_CONVERSION_RATE, RETENTION_VALUE_FRACTION,
};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn scenario_with_daily_hours(lunch: f64, dinner: f64) -> Scenario {
    let mut server = ServerProfile::new("Server 1");
    server.hours = [[lunch, dinner]; 7];

    Scenario {
        servers: vec![server],
        check_sizes: Default::default(),
        params: Default::default(),
        phone_time: Default::default(),
    }
}

#[test]
fn payback_is_not_applicable_without_savings() {
    // Zero coverage leaves the full opportunity cost and adds the
    // subscription on top: monthly savings are negative.
    let mut scenario = scenario_with_daily_hours(5.0, 5.0);
    scenario.params.coverage_percent = 0.0;
    let evaluation = evaluate(&scenario);

    assert!(evaluation.summary.monthly_savings < 0.0);
    assert_eq!(evaluation.summary.payback, Payback::NotApplicable);
}

#[test]
fn payback_is_immediate_without_a_subscription() {
    let mut scenario = scenario_with_daily_hours(5.0, 5.0);
    scenario.params.plan = PlanTier::NoSubscription;
    let evaluation = evaluate(&scenario);

    assert!(evaluation.summary.monthly_savings > 0.0);
    assert_eq!(evaluation.summary.payback, Payback::Immediate);
    assert_eq!(
        evaluation.summary.roi_percent, 0.0,
        "ROI reads zero when the subscription cost is zero"
    );
}

#[test]
fn payback_is_under_a_month_when_savings_exceed_the_price() {
    let evaluation = evaluate(&scenario_with_daily_hours(5.0, 5.0));
    let summary = &evaluation.summary;

    assert!(summary.monthly_savings > PlanTier::Core.monthly_price());
    assert_eq!(summary.payback, Payback::UnderOneMonth);
}

#[test]
fn payback_reports_months_otherwise() {
    // Half the schedule: savings positive but below the plan price.
    let evaluation = evaluate(&scenario_with_daily_hours(2.5, 2.5));
    let summary = &evaluation.summary;

    assert!(summary.monthly_savings > 0.0);
    assert!(summary.monthly_savings < PlanTier::Core.monthly_price());
    match summary.payback {
        Payback::Months(months) => {
            let expected = PlanTier::Core.monthly_price() / summary.monthly_savings;
            assert!(
                approx(months, expected, 1e-9),
                "payback {months:.3} months, expected {expected:.3}"
            );
        }
        other => panic!("expected Payback::Months, got {other:?}"),
    }
}

#[test]
fn reclaimed_hours_follow_coverage() {
    let evaluation = evaluate(&scenario_with_daily_hours(5.0, 5.0));
    let summary = &evaluation.summary;

    // 45.15 phone hours × 70% coverage
    assert!(
        approx(summary.hours_reclaimed, 31.605, 1e-6),
        "reclaimed {:.4} hours",
        summary.hours_reclaimed
    );
}

#[test]
fn breakdown_mixes_costs_and_gains() {
    let evaluation = evaluate(&scenario_with_daily_hours(5.0, 5.0));
    let breakdown = &evaluation.breakdown;

    assert_eq!(breakdown.len(), 7);
    let costs = breakdown.iter().filter(|i| i.kind == ImpactKind::Cost).count();
    let gains = breakdown.iter().filter(|i| i.kind == ImpactKind::Gain).count();
    assert_eq!((costs, gains), (4, 3));

    for item in breakdown {
        assert!(item.value.is_finite(), "{} is not finite", item.name);
    }
}

#[test]
fn retention_is_a_fixed_fraction_of_phone_revenue() {
    let evaluation = evaluate(&scenario_with_daily_hours(5.0, 5.0));
    let summary = &evaluation.summary;

    let revenue = summary.phone_hours_per_month
        * RESERVATIONS_PER_PHONE_HOUR
        * AVG_RESERVATION_VALUE
        * RESERVATION_CONVERSION_RATE;

    let retention = evaluation
        .breakdown
        .iter()
        .find(|i| i.name == "Customer Retention")
        .expect("retention line item");
    assert!(
        approx(retention.value, revenue * RETENTION_VALUE_FRACTION, 1e-9),
        "retention {:.4}",
        retention.value
    );

    let net_impact = evaluation
        .breakdown
        .iter()
        .find(|i| i.name == "Automation Net Impact")
        .expect("net impact line item");
    assert!(
        approx(net_impact.value, summary.monthly_savings, 1e-9),
        "net impact should equal monthly savings"
    );
}
