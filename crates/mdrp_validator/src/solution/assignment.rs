use serde::Serialize;

/// A bundle of orders served by one courier: a single pickup event
/// followed by dropoffs in the bundle's declared sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub assignment_time: i64,
    pub pickup_time: i64,
    pub courier: String,
    /// Non-empty; sequence order is the intended dropoff order.
    pub bundle: Vec<String>,
}
