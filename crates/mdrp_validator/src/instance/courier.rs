use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Courier {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub on_time: i64,
    pub off_time: i64,
}

impl Courier {
    pub fn shift_duration(&self) -> i64 {
        self.off_time - self.on_time
    }
}
