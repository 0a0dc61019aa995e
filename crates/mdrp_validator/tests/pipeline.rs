use std::path::PathBuf;

use mdrp_validator::{
    check::check,
    parsers::{read_instance, read_solution},
    performance::summarize,
    timeline::build_timelines,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/instance")
}

#[test]
fn full_pipeline_on_a_feasible_solution() {
    let dir = fixture_dir();
    let instance = read_instance(&dir).unwrap();
    let solution = read_solution(&dir).unwrap();

    let timelines = build_timelines(&instance, &solution).unwrap();
    let outcome = check(&instance, &solution, &timelines);

    assert!(outcome.report.feasible(), "{:#?}", outcome.report);

    let summary = summarize(&instance, &solution, &outcome.activity);
    assert_eq!(summary.total_delivered, 1);
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.total_cost, Some(25.0));
    assert_eq!(summary.order_metrics[0].click_to_door, 20.0);
    assert!(summary.courier_metrics[0].utilization > 0.0);
    assert!(summary.order_stats.is_some());
    assert!(summary.courier_stats.is_some());
    assert!(summary.bundle_stats.is_some());
}

#[test]
fn foreknowledge_violation_makes_the_solution_infeasible() {
    let dir = fixture_dir();
    let instance = read_instance(&dir).unwrap();
    let mut solution = read_solution(&dir).unwrap();
    // assigned before the order was placed
    solution.assignments[0].assignment_time = -5;

    let timelines = build_timelines(&instance, &solution).unwrap();
    let outcome = check(&instance, &solution, &timelines);

    assert!(!outcome.report.feasible());
    assert_eq!(outcome.report.violation_count(), 1);
}

#[test]
fn checking_is_deterministic_across_runs() {
    let dir = fixture_dir();
    let instance = read_instance(&dir).unwrap();
    let solution = read_solution(&dir).unwrap();

    let first = {
        let timelines = build_timelines(&instance, &solution).unwrap();
        let outcome = check(&instance, &solution, &timelines);
        summarize(&instance, &solution, &outcome.activity)
    };
    let second = {
        let timelines = build_timelines(&instance, &solution).unwrap();
        let outcome = check(&instance, &solution, &timelines);
        summarize(&instance, &solution, &outcome.activity)
    };

    assert_eq!(first, second);
}
