use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub id: String,
    pub x: f64,
    pub y: f64,
}
