use anyhow::anyhow;
use fxhash::FxHashMap;

/// Column positions resolved from a header row, so files are read by
/// column name rather than position.
pub(crate) struct Header {
    columns: FxHashMap<String, usize>,
}

impl Header {
    /// Header with single-word column names, split on any whitespace.
    pub(crate) fn from_whitespace(line: &str) -> Self {
        Header {
            columns: line
                .split_whitespace()
                .enumerate()
                .map(|(i, name)| (name.to_string(), i))
                .collect(),
        }
    }

    /// Tab-separated header; column names may contain spaces
    /// (e.g. "pickup service minutes").
    pub(crate) fn from_tabs(line: &str) -> Self {
        Header {
            columns: line
                .split('\t')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .enumerate()
                .map(|(i, name)| (name.to_string(), i))
                .collect(),
        }
    }

    pub(crate) fn column(&self, name: &str, file: &str) -> anyhow::Result<usize> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("missing column `{name}` in {file}"))
    }
}

/// Times are written as integers but occasionally serialized as floats;
/// parse the way the ecosystem's tabular readers coerce them.
pub(crate) fn int_via_float(field: &str) -> anyhow::Result<i64> {
    let value: f64 = field
        .parse()
        .map_err(|_| anyhow!("expected a number, got `{field}`"))?;
    Ok(value as i64)
}

/// Lenient numeric coercion: malformed or non-finite entries become
/// missing values instead of aborting the run.
pub(crate) fn coerce_time(field: &str) -> Option<i64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_columns_by_name() {
        let header = Header::from_whitespace("order x y restaurant placement_time ready_time");

        assert_eq!(header.column("order", "orders.txt").unwrap(), 0);
        assert_eq!(header.column("ready_time", "orders.txt").unwrap(), 5);
        assert!(header.column("missing", "orders.txt").is_err());
    }

    #[test]
    fn tab_header_keeps_multi_word_names() {
        let header = Header::from_tabs("meters_per_minute\tpickup service minutes\tpay per order");

        assert_eq!(header.column("pickup service minutes", "p.txt").unwrap(), 1);
        assert_eq!(header.column("pay per order", "p.txt").unwrap(), 2);
    }

    #[test]
    fn coercion_turns_garbage_into_missing() {
        assert_eq!(coerce_time("42"), Some(42));
        assert_eq!(coerce_time("42.0"), Some(42));
        assert_eq!(coerce_time("nan"), None);
        assert_eq!(coerce_time("never"), None);
    }
}
