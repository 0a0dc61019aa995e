use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    check::{FeasibilityReport, RuleSection, Violation},
    instance::Instance,
    solution::Solution,
    timeline::Timelines,
};

/// Per-courier byproducts accumulated while checking. These feed the
/// performance aggregator and are returned explicitly; nothing is kept
/// across runs.
#[derive(Debug, Clone)]
pub struct CourierActivity {
    pub bundles_delivered: FxHashMap<String, u32>,
    pub orders_delivered: FxHashMap<String, u32>,
    pub time_driving: FxHashMap<String, i64>,
    pub time_picking: FxHashMap<String, i64>,
    pub time_dropping: FxHashMap<String, i64>,
    pub bundle_sizes: Vec<usize>,
}

impl CourierActivity {
    fn for_instance(instance: &Instance) -> Self {
        let zeroes_u32 = || {
            instance
                .couriers
                .iter()
                .map(|c| (c.id.clone(), 0u32))
                .collect::<FxHashMap<_, _>>()
        };
        let zeroes_i64 = || {
            instance
                .couriers
                .iter()
                .map(|c| (c.id.clone(), 0i64))
                .collect::<FxHashMap<_, _>>()
        };
        CourierActivity {
            bundles_delivered: zeroes_u32(),
            orders_delivered: zeroes_u32(),
            time_driving: zeroes_i64(),
            time_picking: zeroes_i64(),
            time_dropping: zeroes_i64(),
            bundle_sizes: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub report: FeasibilityReport,
    pub activity: CourierActivity,
}

/// Runs all feasibility rules over the instance, the solution and the
/// reconstructed timelines. Every rule always runs; the verdict is the
/// conjunction of all of them. There is no fatal path in here.
pub fn check(instance: &Instance, solution: &Solution, timelines: &Timelines) -> CheckOutcome {
    let mut activity = CourierActivity::for_instance(instance);
    for (courier, &driving) in &timelines.driving_time {
        activity.time_driving.insert(courier.clone(), driving);
    }

    let sections = vec![
        RuleSection::new(
            "every order is in at most one assignment",
            "orders in more than one assignment",
            single_assignment(solution),
        ),
        RuleSection::new(
            "assignments are never made before information is revealed",
            "assignments made before orders are placed",
            no_foreknowledge(instance, solution, &mut activity),
        ),
        RuleSection::new(
            "bundles are picked up before the off-time of their courier",
            "bundles picked up after the off-time of their courier",
            pickup_before_off_time(instance, solution, &mut activity),
        ),
        RuleSection::new(
            "bundle pickup times respect ready times",
            "bundle pickup times do not respect individual ready times",
            ready_before_pickup(instance, solution),
        ),
        RuleSection::new(
            "dropoffs follow the prescribed sequence",
            "dropoffs do not follow the prescribed sequence",
            sequenced_dropoffs(instance, solution),
        ),
        RuleSection::new(
            "continuity in sequence of origin-destination pairs",
            "discontinuities in sequence of origin-destination pairs",
            timelines.continuity_violations.clone(),
        ),
        RuleSection::new(
            "departure and arrival times are consistent",
            "departures sometimes happen before arrivals",
            timelines.ordering_violations.clone(),
        ),
        RuleSection::new(
            "dropoff times and locations are consistent",
            "inconsistencies in dropoff times and locations",
            dropoff_locations(instance, solution, timelines, &mut activity),
        ),
        RuleSection::new(
            "pickup times and locations are consistent",
            "inconsistencies in pickup times and locations",
            pickup_locations(instance, solution, timelines, &mut activity),
        ),
    ];

    let report = FeasibilityReport { sections };
    debug!(
        feasible = report.feasible(),
        violations = report.violation_count(),
        "feasibility check complete"
    );

    CheckOutcome { report, activity }
}

/// Rule 1: an order may appear in at most one bundle across the whole
/// assignment set.
fn single_assignment(solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    for outcome in &solution.outcomes {
        let bundles = solution
            .assignments
            .iter()
            .filter(|a| a.bundle.iter().any(|o| o == &outcome.order))
            .count();
        if bundles > 1 {
            violations.push(Violation::DuplicateAssignment {
                order: outcome.order.clone(),
                bundles,
            });
        }
    }
    violations
}

/// Rule 2: assignments cannot precede order placement. Bundle sizes are
/// recorded on the side while the bundles are walked.
fn no_foreknowledge(
    instance: &Instance,
    solution: &Solution,
    activity: &mut CourierActivity,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for assignment in &solution.assignments {
        for order_id in &assignment.bundle {
            if let Some(order) = instance.order(order_id)
                && assignment.assignment_time < order.placement_time
            {
                violations.push(Violation::AssignedBeforePlacement {
                    order: order_id.clone(),
                    assignment_time: assignment.assignment_time,
                    placement_time: order.placement_time,
                });
            }
        }
        activity.bundle_sizes.push(assignment.bundle.len());
    }
    violations
}

/// Rule 3: the bundle pickup must happen before the serving courier's
/// off-time. Bundle counts per courier are recorded on the side.
fn pickup_before_off_time(
    instance: &Instance,
    solution: &Solution,
    activity: &mut CourierActivity,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for assignment in &solution.assignments {
        let Some(courier) = instance.courier(&assignment.courier) else {
            continue;
        };
        if courier.off_time < assignment.pickup_time {
            violations.push(Violation::PickupAfterOffTime {
                courier: courier.id.clone(),
                pickup_time: assignment.pickup_time,
                off_time: courier.off_time,
            });
        }
        if let Some(count) = activity.bundles_delivered.get_mut(&courier.id) {
            *count += 1;
        }
    }
    violations
}

/// Rule 4: one physical pickup serves the whole bundle, so the pickup
/// time must not precede any member's ready time.
fn ready_before_pickup(instance: &Instance, solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    for assignment in &solution.assignments {
        for order_id in &assignment.bundle {
            if let Some(order) = instance.order(order_id)
                && order.ready_time > assignment.pickup_time
            {
                violations.push(Violation::PickupBeforeReady {
                    order: order_id.clone(),
                    pickup_time: assignment.pickup_time,
                    ready_time: order.ready_time,
                });
            }
        }
    }
    violations
}

/// Rule 5: dropoffs happen one at a time in the bundle's declared
/// sequence, each consuming the dropoff service time.
fn sequenced_dropoffs(instance: &Instance, solution: &Solution) -> Vec<Violation> {
    let service = instance.parameters.dropoff_service_minutes;
    let mut violations = Vec::new();
    for assignment in &solution.assignments {
        let mut previous: Option<i64> = None;
        for order_id in &assignment.bundle {
            let dropoff = solution.outcome(order_id).and_then(|o| o.dropoff_time);
            if let (Some(dropoff), Some(previous)) = (dropoff, previous)
                && dropoff < previous + service
            {
                violations.push(Violation::DropoffOutOfSequence {
                    order: order_id.clone(),
                    dropoff_time: dropoff,
                    earliest: previous + service,
                });
            }
            previous = dropoff;
        }
    }
    violations
}

/// Rule 6a: at the recorded dropoff time the courier must be at the
/// order's own location. Per-courier served counts and dropoff service
/// time are recorded on the side.
fn dropoff_locations(
    instance: &Instance,
    solution: &Solution,
    timelines: &Timelines,
    activity: &mut CourierActivity,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for outcome in &solution.outcomes {
        let Some(courier) = &outcome.courier else {
            continue;
        };
        if !activity.orders_delivered.contains_key(courier) {
            continue;
        }
        let Some(dropoff) = outcome.dropoff_time else {
            continue;
        };
        let timeline = &timelines.by_courier[courier];
        let actual = timeline.location_at(dropoff);
        if actual != Some(outcome.order.as_str()) {
            violations.push(Violation::DropoffLocationMismatch {
                order: outcome.order.clone(),
                courier: courier.clone(),
                time: dropoff,
                expected: outcome.order.clone(),
                actual: actual.unwrap_or("in transit").to_string(),
            });
        }
        if let Some(time) = activity.time_dropping.get_mut(courier) {
            *time += instance.parameters.dropoff_service_minutes;
        }
        if let Some(count) = activity.orders_delivered.get_mut(courier) {
            *count += 1;
        }
    }
    violations
}

/// Rule 6b: at the bundle's pickup time the courier must be at the
/// restaurant of the bundle's first order. Pickup service time per
/// courier is recorded on the side.
fn pickup_locations(
    instance: &Instance,
    solution: &Solution,
    timelines: &Timelines,
    activity: &mut CourierActivity,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for assignment in &solution.assignments {
        let Some(first) = assignment.bundle.first() else {
            continue;
        };
        let Some(order) = instance.order(first) else {
            continue;
        };
        let Some(timeline) = timelines.by_courier.get(&assignment.courier) else {
            continue;
        };
        let actual = timeline.location_at(assignment.pickup_time);
        if actual != Some(order.restaurant.as_str()) {
            violations.push(Violation::PickupLocationMismatch {
                order: first.clone(),
                courier: assignment.courier.clone(),
                time: assignment.pickup_time,
                expected: order.restaurant.clone(),
                actual: actual.unwrap_or("in transit").to_string(),
            });
        }
        if let Some(time) = activity.time_picking.get_mut(&assignment.courier) {
            *time += instance.parameters.pickup_service_minutes;
        }
    }
    violations
}
