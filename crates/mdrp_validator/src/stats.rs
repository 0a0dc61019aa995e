use serde::Serialize;
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Descriptive statistics over one sample of f64 values. `std` is the
/// sample standard deviation. For an empty sample every field except
/// `count` is NaN; a single-value sample has a NaN `std`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p10: f64,
    pub p90: f64,
    pub max: f64,
}

/// Field-by-field equality with NaN equal to itself. Summaries built
/// from the same input must compare equal, NaN fields included.
impl PartialEq for Describe {
    fn eq(&self, other: &Self) -> bool {
        let eq = |a: f64, b: f64| a == b || (a.is_nan() && b.is_nan());
        self.count == other.count
            && eq(self.mean, other.mean)
            && eq(self.std, other.std)
            && eq(self.min, other.min)
            && eq(self.p10, other.p10)
            && eq(self.p90, other.p90)
            && eq(self.max, other.max)
    }
}

pub fn describe(values: &[f64]) -> Describe {
    if values.is_empty() {
        return Describe {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p10: f64::NAN,
            p90: f64::NAN,
            max: f64::NAN,
        };
    }

    let mut data = Data::new(values.to_vec());
    Describe {
        count: values.len(),
        mean: values.mean(),
        std: values.std_dev(),
        min: values.min(),
        p10: data.percentile(10),
        p90: data.percentile(90),
        max: values.max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_a_simple_sample() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < 1e-9);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-9);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert!(stats.p10 >= 1.0 && stats.p10 <= 2.0);
        assert!(stats.p90 >= 4.0 && stats.p90 <= 5.0);
    }

    #[test]
    fn constant_sample_collapses_to_one_value() {
        let stats = describe(&[2.0, 2.0, 2.0]);

        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.p10, 2.0);
        assert_eq!(stats.p90, 2.0);
        assert_eq!(stats.max, 2.0);
    }

    #[test]
    fn empty_sample_has_count_zero() {
        let stats = describe(&[]);

        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn single_value_has_nan_std() {
        let stats = describe(&[7.0]);

        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.0);
        assert!(stats.std.is_nan());
    }

    #[test]
    fn nan_fields_do_not_break_equality() {
        assert_eq!(describe(&[7.0]), describe(&[7.0]));
        assert_eq!(describe(&[]), describe(&[]));
        assert_ne!(describe(&[7.0]), describe(&[8.0]));
    }
}
