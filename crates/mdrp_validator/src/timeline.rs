use fxhash::FxHashMap;

use crate::{
    check::Violation,
    error::ValidationError,
    instance::{Courier, Instance, LocationTable},
    solution::{CourierMove, Solution},
};

/// A point on a courier's reconstructed space-time path. `place` is
/// `None` while the courier is in transit between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub time: i64,
    pub place: Option<String>,
}

impl Breakpoint {
    pub fn at(time: i64, place: impl Into<String>) -> Self {
        Breakpoint {
            time,
            place: Some(place.into()),
        }
    }

    pub fn in_transit(time: i64) -> Self {
        Breakpoint { time, place: None }
    }
}

/// Where a courier is at each instant, as an ordered breakpoint sequence
/// starting at (on_time, home location). Derived once per run and
/// discarded afterwards.
#[derive(Debug, Clone)]
pub struct CourierTimeline {
    courier: String,
    breakpoints: Vec<Breakpoint>,
}

impl CourierTimeline {
    pub fn from_breakpoints(courier: impl Into<String>, breakpoints: Vec<Breakpoint>) -> Self {
        CourierTimeline {
            courier: courier.into(),
            breakpoints,
        }
    }

    pub fn courier(&self) -> &str {
        &self.courier
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Location at the latest breakpoint whose time is <= `time`. A
    /// lookup that lands exactly on an arrival resolves to the arrival
    /// location. `None` means in transit, or before the first breakpoint.
    pub fn location_at(&self, time: i64) -> Option<&str> {
        let idx = self.breakpoints.partition_point(|bp| bp.time <= time);
        if idx == 0 {
            None
        } else {
            self.breakpoints[idx - 1].place.as_deref()
        }
    }

    fn is_ordered(&self) -> bool {
        self.breakpoints.windows(2).all(|w| w[0].time <= w[1].time)
    }

    fn times(&self) -> Vec<i64> {
        self.breakpoints.iter().map(|bp| bp.time).collect()
    }
}

/// Result of building one courier's timeline. Violations are collected,
/// not raised: the checker still needs a best-effort timeline.
#[derive(Debug)]
pub struct TimelineBuild {
    pub timeline: CourierTimeline,
    pub driving_time: i64,
    pub continuity_violations: Vec<Violation>,
    pub ordering_violations: Vec<Violation>,
}

pub fn build_timeline(
    courier: &Courier,
    moves: &[CourierMove],
    locations: &LocationTable,
    meters_per_minute: f64,
) -> Result<TimelineBuild, ValidationError> {
    let mut breakpoints = vec![Breakpoint::at(courier.on_time, &courier.id)];
    let mut continuity_violations = Vec::new();
    let mut driving_time = 0;

    for mv in moves {
        let at = breakpoints
            .last()
            .and_then(|bp| bp.place.clone())
            .unwrap_or_default();
        if mv.origin != at {
            continuity_violations.push(Violation::Discontinuity {
                courier: courier.id.clone(),
                origin: mv.origin.clone(),
                at,
            });
        }
        let travel = locations.travel_time(&mv.origin, &mv.destination, meters_per_minute)?;
        breakpoints.push(Breakpoint::in_transit(mv.departure_time));
        breakpoints.push(Breakpoint::at(mv.departure_time + travel, &mv.destination));
        driving_time += travel;
    }

    let timeline = CourierTimeline::from_breakpoints(&courier.id, breakpoints);
    let mut ordering_violations = Vec::new();
    if !timeline.is_ordered() {
        ordering_violations.push(Violation::UnorderedTimeline {
            courier: courier.id.clone(),
            times: timeline.times(),
        });
    }

    Ok(TimelineBuild {
        timeline,
        driving_time,
        continuity_violations,
        ordering_violations,
    })
}

/// All courier timelines for one run, plus the movement violations and
/// driving-time totals that fall out of building them.
#[derive(Debug)]
pub struct Timelines {
    pub by_courier: FxHashMap<String, CourierTimeline>,
    pub driving_time: FxHashMap<String, i64>,
    pub continuity_violations: Vec<Violation>,
    pub ordering_violations: Vec<Violation>,
}

/// Builds a timeline for every courier in the instance. Couriers without
/// logged moves get a one-point timeline at their home location; logs for
/// couriers unknown to the instance are ignored.
pub fn build_timelines(
    instance: &Instance,
    solution: &Solution,
) -> Result<Timelines, ValidationError> {
    let mut by_courier = FxHashMap::default();
    let mut driving_time = FxHashMap::default();
    let mut continuity_violations = Vec::new();
    let mut ordering_violations = Vec::new();

    for courier in &instance.couriers {
        let build = build_timeline(
            courier,
            solution.moves_for(&courier.id),
            &instance.locations,
            instance.parameters.meters_per_minute,
        )?;
        by_courier.insert(courier.id.clone(), build.timeline);
        driving_time.insert(courier.id.clone(), build.driving_time);
        continuity_violations.extend(build.continuity_violations);
        ordering_violations.extend(build.ordering_violations);
    }

    Ok(Timelines {
        by_courier,
        driving_time,
        continuity_violations,
        ordering_violations,
    })
}
