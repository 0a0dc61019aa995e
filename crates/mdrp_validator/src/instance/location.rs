use fxhash::FxHashMap;
use geo::{Distance, Euclidean};

use crate::error::ValidationError;

/// Unified location table spanning orders, restaurants and couriers.
/// Travel time is computed between any two ids in this table.
#[derive(Debug, Default)]
pub struct LocationTable {
    points: FxHashMap<String, geo::Point>,
}

impl LocationTable {
    pub fn insert(&mut self, id: impl Into<String>, x: f64, y: f64) {
        self.points.insert(id.into(), geo::Point::new(x, y));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    pub fn point(&self, id: &str) -> Result<geo::Point, ValidationError> {
        self.points
            .get(id)
            .copied()
            .ok_or_else(|| ValidationError::UnknownLocation(id.to_string()))
    }

    /// Straight-line travel time in whole minutes, rounded up.
    pub fn travel_time(
        &self,
        origin: &str,
        destination: &str,
        meters_per_minute: f64,
    ) -> Result<i64, ValidationError> {
        let from = self.point(origin)?;
        let to = self.point(destination)?;
        let distance = Euclidean.distance(from, to);
        Ok((distance / meters_per_minute).ceil() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_time_rounds_up_to_whole_minutes() {
        let mut locations = LocationTable::default();
        locations.insert("a", 0.0, 0.0);
        locations.insert("b", 300.0, 400.0);

        // distance 500, speed 200 -> 2.5 minutes, rounded up to 3
        assert_eq!(locations.travel_time("a", "b", 200.0).unwrap(), 3);
        // exact multiples are not rounded further
        assert_eq!(locations.travel_time("a", "b", 100.0).unwrap(), 5);
        assert_eq!(locations.travel_time("a", "a", 100.0).unwrap(), 0);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut locations = LocationTable::default();
        locations.insert("a", 0.0, 0.0);

        let err = locations.travel_time("a", "nowhere", 100.0).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownLocation(id) if id == "nowhere"));
    }
}
