use serde::Serialize;

/// Reported outcome for one order. Timing fields are `None` when the
/// solution file carried a non-numeric entry (undelivered orders).
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutcome {
    pub order: String,
    pub placement_time: Option<i64>,
    pub ready_time: Option<i64>,
    pub pickup_time: Option<i64>,
    pub dropoff_time: Option<i64>,
    pub courier: Option<String>,
}

impl OrderOutcome {
    /// An order counts as delivered when every outcome field is present.
    pub fn is_delivered(&self) -> bool {
        self.placement_time.is_some()
            && self.ready_time.is_some()
            && self.pickup_time.is_some()
            && self.dropoff_time.is_some()
            && self.courier.is_some()
    }
}
