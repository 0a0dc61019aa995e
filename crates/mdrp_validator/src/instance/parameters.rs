use serde::Serialize;

/// Global instance parameters, read once per run.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceParameters {
    pub meters_per_minute: f64,
    pub pickup_service_minutes: i64,
    pub dropoff_service_minutes: i64,
    pub target_click_to_door: i64,
    pub pay_per_order: f64,
    pub guaranteed_pay_per_hour: f64,
}

impl Default for InstanceParameters {
    fn default() -> Self {
        InstanceParameters {
            meters_per_minute: 1.0,
            pickup_service_minutes: 0,
            dropoff_service_minutes: 0,
            target_click_to_door: 0,
            pay_per_order: 0.0,
            guaranteed_pay_per_hour: 0.0,
        }
    }
}
