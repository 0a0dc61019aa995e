use serde::Serialize;
use tracing::debug;

use crate::{
    check::CourierActivity,
    instance::Instance,
    solution::Solution,
    stats::{Describe, describe},
};

/// Service-level metrics for one delivered order, in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderMetrics {
    pub order: String,
    pub click_to_door: f64,
    pub ready_to_door: f64,
    pub ready_to_pickup: f64,
    pub click_to_door_overage: f64,
}

/// Productivity and earnings metrics for one courier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierMetrics {
    pub courier: String,
    pub shift_duration: i64,
    pub orders_delivered: u32,
    pub bundles_delivered: u32,
    pub orders_per_hour: f64,
    pub bundles_per_hour: f64,
    pub guaranteed_earnings: f64,
    pub order_earnings: f64,
    pub payment: f64,
    pub utilization: f64,
}

/// One labeled column of a statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricColumn {
    pub name: &'static str,
    pub stats: Describe,
}

/// Aggregate performance of a feasible solution. Statistics sections are
/// `None` when their metric group could not be computed, so one failed
/// group never poisons the rest of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_orders: usize,
    pub total_delivered: usize,
    pub total_cost: Option<f64>,
    pub proportion_trueup: Option<f64>,
    pub order_metrics: Vec<OrderMetrics>,
    pub courier_metrics: Vec<CourierMetrics>,
    pub order_stats: Option<Vec<MetricColumn>>,
    pub courier_stats: Option<Vec<MetricColumn>>,
    pub bundle_stats: Option<Vec<MetricColumn>>,
}

/// Computes per-order, per-courier and fleet-level metrics. Only called
/// on a feasible verdict; deterministic for a given input.
pub fn summarize(
    instance: &Instance,
    solution: &Solution,
    activity: &CourierActivity,
) -> PerformanceSummary {
    let total_delivered = solution
        .outcomes
        .iter()
        .filter(|o| o.is_delivered())
        .count();

    let order_metrics = order_metrics(instance, solution);
    let courier_metrics = courier_metrics(instance, activity);

    let total_cost = if courier_metrics.is_empty() {
        None
    } else {
        Some(courier_metrics.iter().map(|c| c.payment).sum())
    };
    let proportion_trueup = if courier_metrics.is_empty() {
        None
    } else {
        let trueups = courier_metrics
            .iter()
            .filter(|c| c.order_earnings < c.guaranteed_earnings)
            .count();
        Some(trueups as f64 / courier_metrics.len() as f64)
    };

    let order_stats = order_stats(&order_metrics);
    let courier_stats = courier_stats(&courier_metrics);
    let bundle_stats = bundle_stats(&activity.bundle_sizes);

    debug!(
        total_delivered,
        total_cost, "performance summary computed"
    );

    PerformanceSummary {
        total_orders: instance.orders.len(),
        total_delivered,
        total_cost,
        proportion_trueup,
        order_metrics,
        courier_metrics,
        order_stats,
        courier_stats,
        bundle_stats,
    }
}

fn order_metrics(instance: &Instance, solution: &Solution) -> Vec<OrderMetrics> {
    let target = instance.parameters.target_click_to_door as f64;
    let mut metrics = Vec::new();
    for outcome in &solution.outcomes {
        let Some(order) = instance.order(&outcome.order) else {
            continue;
        };
        let (Some(pickup), Some(dropoff)) = (outcome.pickup_time, outcome.dropoff_time) else {
            continue;
        };
        let click_to_door = (dropoff - order.placement_time) as f64;
        metrics.push(OrderMetrics {
            order: outcome.order.clone(),
            click_to_door,
            ready_to_door: (dropoff - order.ready_time) as f64,
            ready_to_pickup: (pickup - order.ready_time) as f64,
            click_to_door_overage: (click_to_door - target).max(0.0),
        });
    }
    metrics
}

fn courier_metrics(instance: &Instance, activity: &CourierActivity) -> Vec<CourierMetrics> {
    let parameters = &instance.parameters;
    instance
        .couriers
        .iter()
        .map(|courier| {
            let shift_duration = courier.shift_duration();
            let orders = activity
                .orders_delivered
                .get(&courier.id)
                .copied()
                .unwrap_or(0);
            let bundles = activity
                .bundles_delivered
                .get(&courier.id)
                .copied()
                .unwrap_or(0);
            let active_time = activity.time_driving.get(&courier.id).copied().unwrap_or(0)
                + activity.time_picking.get(&courier.id).copied().unwrap_or(0)
                + activity
                    .time_dropping
                    .get(&courier.id)
                    .copied()
                    .unwrap_or(0);

            let per_hour = |count: u32| {
                if shift_duration > 0 {
                    60.0 * count as f64 / shift_duration as f64
                } else {
                    0.0
                }
            };
            let guaranteed_earnings =
                shift_duration as f64 * parameters.guaranteed_pay_per_hour / 60.0;
            let order_earnings = orders as f64 * parameters.pay_per_order;

            CourierMetrics {
                courier: courier.id.clone(),
                shift_duration,
                orders_delivered: orders,
                bundles_delivered: bundles,
                orders_per_hour: per_hour(orders),
                bundles_per_hour: per_hour(bundles),
                guaranteed_earnings,
                order_earnings,
                payment: order_earnings.max(guaranteed_earnings),
                utilization: if shift_duration > 0 {
                    active_time as f64 / shift_duration as f64
                } else {
                    0.0
                },
            }
        })
        .collect()
}

fn order_stats(metrics: &[OrderMetrics]) -> Option<Vec<MetricColumn>> {
    if metrics.is_empty() {
        return None;
    }
    let column = |name, values: Vec<f64>| MetricColumn {
        name,
        stats: describe(&values),
    };
    Some(vec![
        column(
            "click-to-door",
            metrics.iter().map(|m| m.click_to_door).collect(),
        ),
        column(
            "ready-to-door",
            metrics.iter().map(|m| m.ready_to_door).collect(),
        ),
        column(
            "ready-to-pickup",
            metrics.iter().map(|m| m.ready_to_pickup).collect(),
        ),
        column(
            "click-to-door overage",
            metrics.iter().map(|m| m.click_to_door_overage).collect(),
        ),
    ])
}

fn courier_stats(metrics: &[CourierMetrics]) -> Option<Vec<MetricColumn>> {
    if metrics.is_empty() {
        return None;
    }
    let column = |name, values: Vec<f64>| MetricColumn {
        name,
        stats: describe(&values),
    };
    Some(vec![
        column(
            "orders_per_hour",
            metrics.iter().map(|m| m.orders_per_hour).collect(),
        ),
        column(
            "bundles_per_hour",
            metrics.iter().map(|m| m.bundles_per_hour).collect(),
        ),
        column(
            "utilization",
            metrics.iter().map(|m| m.utilization).collect(),
        ),
        column(
            "guaranteed_earnings",
            metrics.iter().map(|m| m.guaranteed_earnings).collect(),
        ),
        column(
            "order_earnings",
            metrics.iter().map(|m| m.order_earnings).collect(),
        ),
        column("payment", metrics.iter().map(|m| m.payment).collect()),
    ])
}

fn bundle_stats(bundle_sizes: &[usize]) -> Option<Vec<MetricColumn>> {
    if bundle_sizes.is_empty() {
        return None;
    }
    let values: Vec<f64> = bundle_sizes.iter().map(|&s| s as f64).collect();
    Some(vec![MetricColumn {
        name: "orders_per_bundle",
        stats: describe(&values),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        check::check,
        test_utils::{sample_instance, sample_solution},
        timeline::build_timelines,
    };

    fn feasible_summary() -> PerformanceSummary {
        let instance = sample_instance();
        let solution = sample_solution();
        let timelines = build_timelines(&instance, &solution).unwrap();
        let outcome = check(&instance, &solution, &timelines);
        assert!(outcome.report.feasible());
        summarize(&instance, &solution, &outcome.activity)
    }

    #[test]
    fn computes_order_and_courier_metrics() {
        let summary = feasible_summary();

        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_delivered, 1);

        let order = &summary.order_metrics[0];
        assert_eq!(order.click_to_door, 20.0);
        assert_eq!(order.ready_to_door, 12.0);
        assert_eq!(order.ready_to_pickup, 2.0);
        // target click-to-door is 15
        assert_eq!(order.click_to_door_overage, 5.0);

        let courier = &summary.courier_metrics[0];
        assert_eq!(courier.shift_duration, 100);
        assert_eq!(courier.orders_delivered, 1);
        assert_eq!(courier.bundles_delivered, 1);
        // guaranteed 100 * 15 / 60 = 25 beats 1 order * 10
        assert_eq!(courier.guaranteed_earnings, 25.0);
        assert_eq!(courier.order_earnings, 10.0);
        assert_eq!(courier.payment, 25.0);
        // driving 8 + picking 2 + dropping 5 over a 100 minute shift
        assert!((courier.utilization - 0.15).abs() < 1e-9);
        assert!(courier.utilization > 0.0);

        assert_eq!(summary.total_cost, Some(25.0));
        assert_eq!(summary.proportion_trueup, Some(1.0));
    }

    #[test]
    fn summarizing_twice_yields_identical_reports() {
        let first = feasible_summary();
        let second = feasible_summary();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_duration_shift_yields_zero_utilization() {
        let mut instance = sample_instance();
        instance.couriers[0].off_time = 0;
        let activity_source = sample_solution();
        let timelines = build_timelines(&instance, &activity_source).unwrap();
        let outcome = check(&instance, &activity_source, &timelines);

        let summary = summarize(&instance, &activity_source, &outcome.activity);

        let courier = &summary.courier_metrics[0];
        assert_eq!(courier.utilization, 0.0);
        assert_eq!(courier.orders_per_hour, 0.0);
    }

    #[test]
    fn empty_metric_groups_are_omitted() {
        let instance = sample_instance();
        let solution = crate::solution::Solution::new(vec![], vec![], vec![]);
        let timelines = build_timelines(&instance, &solution).unwrap();
        let outcome = check(&instance, &solution, &timelines);

        let summary = summarize(&instance, &solution, &outcome.activity);

        assert_eq!(summary.total_delivered, 0);
        assert!(summary.order_stats.is_none());
        assert!(summary.bundle_stats.is_none());
        assert!(summary.courier_stats.is_some());
    }
}
