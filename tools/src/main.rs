//! roi-runner: headless evaluation runner for the phone-time cost model.
//!
//! Usage:
//!   roi-runner --scenario data/sample_scenario.json
//!   roi-runner --scenario scenario.json --json

use anyhow::{Context, Result};
use phonecost_core::{
    config::Scenario,
    evaluator::{evaluate, Evaluation},
    phone_time::weighted_phone_time,
    summary::{ImpactKind, Payback},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let scenario_path = args
        .windows(2)
        .find(|w| w[0] == "--scenario")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "./data/sample_scenario.json".to_string());
    let json_output = args.iter().any(|a| a == "--json");

    let mut scenario = Scenario::from_json_file(&scenario_path)
        .with_context(|| format!("loading scenario from {scenario_path}"))?;

    // Adopt the schedule-derived phone time unless it sits within the
    // hysteresis band of the configured evaluation point.
    let estimate = weighted_phone_time(&scenario.servers);
    scenario.phone_time = scenario.phone_time.reconcile(estimate);
    log::info!(
        "weighted phone time estimate {estimate}%, evaluating at {}%",
        scenario.phone_time.percent()
    );

    let evaluation = evaluate(&scenario);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    print_report(&scenario_path, &scenario, &evaluation);
    Ok(())
}

fn print_report(path: &str, scenario: &Scenario, evaluation: &Evaluation) {
    let s = &evaluation.summary;

    println!("Phone-Time Opportunity Cost Report");
    println!("  scenario:  {path}");
    println!("  generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    println!("  plan:      {}", scenario.params.plan.label());
    println!();

    println!("Summary at {:.0}% average phone time", s.phone_time_percent);
    println!("  monthly cost without automation:  ${:.2}", s.cost_without_automation);
    println!("  monthly cost with automation:     ${:.2}", s.cost_with_automation);
    println!("  monthly savings:                  ${:.2}", s.monthly_savings);
    println!("  annual savings:                   ${:.2}", s.annual_savings);
    println!("  ROI:                              {:.0}%", s.roi_percent);
    println!("  payback period:                   {}", payback_label(s.payback));
    println!("  server hours reclaimed / month:   {:.1}", s.hours_reclaimed);
    println!();

    println!("Per server (monthly)");
    for server in &evaluation.server_impacts {
        println!(
            "  {:<16} {:>5.1} h/wk  without ${:>9.2}  with ${:>9.2}  savings ${:>9.2}",
            server.name,
            server.weekly_hours,
            server.cost_without_automation,
            server.cost_with_automation,
            server.savings
        );
    }
    println!();

    println!("Per day (monthly opportunity cost)");
    for day in &evaluation.day_impacts {
        println!(
            "  {:<10} {:>5.1} h/wk  ${:>9.2}",
            day.day.label(),
            day.scheduled_hours,
            day.opportunity_cost
        );
    }
    println!();

    if !evaluation.breakdown.is_empty() {
        println!("Cost vs. benefit breakdown");
        for item in &evaluation.breakdown {
            let sign = match item.kind {
                ImpactKind::Cost => "-",
                ImpactKind::Gain => "+",
            };
            println!("  {sign} {:<26} ${:.2}", item.name, item.value);
        }
    }
}

fn payback_label(payback: Payback) -> String {
    match payback {
        Payback::NotApplicable => "n/a".to_string(),
        Payback::Immediate => "immediate".to_string(),
        Payback::UnderOneMonth => "< 1 month".to_string(),
        Payback::Months(m) => format!("{m:.1} months"),
    }
}
