use serde::Serialize;
use thiserror::Error;

/// One feasibility defect. Violations are collected and reported, never
/// raised; the `Display` text is what ends up in `feasibility_check.txt`.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum Violation {
    #[error("order {order} appears in {bundles} assignment bundles")]
    DuplicateAssignment { order: String, bundles: usize },

    #[error("order {order}: assigned at t={assignment_time}, placed at t={placement_time}")]
    AssignedBeforePlacement {
        order: String,
        assignment_time: i64,
        placement_time: i64,
    },

    #[error("courier {courier}: bundle picked up at t={pickup_time}, off-time is t={off_time}")]
    PickupAfterOffTime {
        courier: String,
        pickup_time: i64,
        off_time: i64,
    },

    #[error("order {order}: bundle picked up at t={pickup_time}, ready at t={ready_time}")]
    PickupBeforeReady {
        order: String,
        pickup_time: i64,
        ready_time: i64,
    },

    #[error("order {order}: dropped off at t={dropoff_time}, earliest allowed is t={earliest}")]
    DropoffOutOfSequence {
        order: String,
        dropoff_time: i64,
        earliest: i64,
    },

    #[error("courier {courier}: move departs from {origin} but the courier is at {at}")]
    Discontinuity {
        courier: String,
        origin: String,
        at: String,
    },

    #[error("courier {courier}: breakpoint times are not non-decreasing: {times:?}")]
    UnorderedTimeline { courier: String, times: Vec<i64> },

    #[error(
        "order {order}: courier {courier} is at {actual} at dropoff time t={time}, expected {expected}"
    )]
    DropoffLocationMismatch {
        order: String,
        courier: String,
        time: i64,
        expected: String,
        actual: String,
    },

    #[error(
        "order {order}: courier {courier} is at {actual} at pickup time t={time}, expected restaurant {expected}"
    )]
    PickupLocationMismatch {
        order: String,
        courier: String,
        time: i64,
        expected: String,
        actual: String,
    },
}
