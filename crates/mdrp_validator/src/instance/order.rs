use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub restaurant: String,
    pub placement_time: i64,
    pub ready_time: i64,
}
