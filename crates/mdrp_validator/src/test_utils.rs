use crate::{
    instance::{Courier, Instance, InstanceParameters, Order, Restaurant},
    solution::{Assignment, CourierLog, CourierMove, OrderOutcome, Solution},
};

/// One courier, one restaurant, two orders on a 100 m/min grid.
pub(crate) fn sample_instance() -> Instance {
    Instance::new(
        vec![
            Order {
                id: "o1".into(),
                x: 0.0,
                y: 800.0,
                restaurant: "r1".into(),
                placement_time: 0,
                ready_time: 8,
            },
            Order {
                id: "o2".into(),
                x: 300.0,
                y: 800.0,
                restaurant: "r1".into(),
                placement_time: 0,
                ready_time: 8,
            },
        ],
        vec![Restaurant {
            id: "r1".into(),
            x: 0.0,
            y: 400.0,
        }],
        vec![Courier {
            id: "c1".into(),
            x: 0.0,
            y: 0.0,
            on_time: 0,
            off_time: 100,
        }],
        InstanceParameters {
            meters_per_minute: 100.0,
            pickup_service_minutes: 2,
            dropoff_service_minutes: 5,
            target_click_to_door: 15,
            pay_per_order: 10.0,
            guaranteed_pay_per_hour: 15.0,
        },
    )
}

/// A feasible single-order solution for [`sample_instance`]: depart at
/// t=5 towards the restaurant (arrive t=9), pick up at t=10, depart at
/// t=12 towards the order (arrive t=16), drop off at t=20.
pub(crate) fn sample_solution() -> Solution {
    Solution::new(
        vec![Assignment {
            assignment_time: 0,
            pickup_time: 10,
            courier: "c1".into(),
            bundle: vec!["o1".into()],
        }],
        vec![OrderOutcome {
            order: "o1".into(),
            placement_time: Some(0),
            ready_time: Some(8),
            pickup_time: Some(10),
            dropoff_time: Some(20),
            courier: Some("c1".into()),
        }],
        vec![CourierLog {
            courier: "c1".into(),
            moves: vec![
                CourierMove {
                    departure_time: 5,
                    origin: "c1".into(),
                    destination: "r1".into(),
                },
                CourierMove {
                    departure_time: 12,
                    origin: "r1".into(),
                    destination: "o1".into(),
                },
            ],
        }],
    )
}
