use serde::Serialize;

/// One logged movement: the courier leaves `origin` at `departure_time`
/// towards `destination`. Origin "0" in the input file is resolved to
/// the courier's own id at parse time.
#[derive(Debug, Clone, Serialize)]
pub struct CourierMove {
    pub departure_time: i64,
    pub origin: String,
    pub destination: String,
}

/// All moves of one courier, ordered by appearance in the log.
#[derive(Debug, Clone, Serialize)]
pub struct CourierLog {
    pub courier: String,
    pub moves: Vec<CourierMove>,
}
