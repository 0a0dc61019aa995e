pub mod assignment;
pub mod moves;
pub mod outcome;

use fxhash::FxHashMap;

pub use assignment::Assignment;
pub use moves::{CourierLog, CourierMove};
pub use outcome::OrderOutcome;

/// Parsed solution: assignments, per-order outcomes and per-courier
/// movement logs. Read-only for the duration of one validation run.
#[derive(Debug)]
pub struct Solution {
    pub assignments: Vec<Assignment>,
    pub outcomes: Vec<OrderOutcome>,
    pub logs: Vec<CourierLog>,
    log_index: FxHashMap<String, usize>,
    outcome_index: FxHashMap<String, usize>,
}

impl Solution {
    pub fn new(
        assignments: Vec<Assignment>,
        outcomes: Vec<OrderOutcome>,
        logs: Vec<CourierLog>,
    ) -> Self {
        let log_index = logs
            .iter()
            .enumerate()
            .map(|(i, log)| (log.courier.clone(), i))
            .collect();
        let outcome_index = outcomes
            .iter()
            .enumerate()
            .map(|(i, o)| (o.order.clone(), i))
            .collect();
        Solution {
            assignments,
            outcomes,
            logs,
            log_index,
            outcome_index,
        }
    }

    pub fn outcome(&self, order: &str) -> Option<&OrderOutcome> {
        self.outcome_index.get(order).map(|&i| &self.outcomes[i])
    }

    /// Ordered move list for one courier; empty when the courier never moved.
    pub fn moves_for(&self, courier: &str) -> &[CourierMove] {
        self.log_index
            .get(courier)
            .map(|&i| self.logs[i].moves.as_slice())
            .unwrap_or(&[])
    }
}
