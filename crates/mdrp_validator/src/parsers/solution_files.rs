use std::path::Path;

use anyhow::{Context, anyhow};
use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    parsers::table::{Header, coerce_time, int_via_float},
    solution::{Assignment, CourierLog, CourierMove, OrderOutcome, Solution},
};

/// Loads the three solution_info_* files from the solution directory.
pub fn read_solution(dir: &Path) -> anyhow::Result<Solution> {
    let assignments = parse_assignments(&read(dir, "solution_info_assignments.txt")?)?;
    let outcomes = parse_order_outcomes(&read(dir, "solution_info_orders.txt")?)?;
    let logs = parse_courier_moves(&read(dir, "solution_info_couriers.txt")?);

    Ok(Solution::new(assignments, outcomes, logs))
}

fn read(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// Header line, then rows of: assignment_time, pickup_time, courier,
/// followed by the bundle's order ids (variable length, >= 1).
/// Structurally broken rows are skipped with a warning.
pub fn parse_assignments(text: &str) -> anyhow::Result<Vec<Assignment>> {
    let mut assignments = Vec::new();
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 4 {
            warn!("skipping malformed assignment line: {line:?}");
            continue;
        }
        let (Ok(assignment_time), Ok(pickup_time)) =
            (int_via_float(fields[0]), int_via_float(fields[1]))
        else {
            warn!("skipping assignment line with non-numeric times: {line:?}");
            continue;
        };
        assignments.push(Assignment {
            assignment_time,
            pickup_time,
            courier: fields[2].to_string(),
            bundle: fields[3..].iter().map(|s| s.to_string()).collect(),
        });
    }
    Ok(assignments)
}

/// Order outcome table; timing fields are coerced leniently, so an
/// undelivered order's "nan" entries become missing values.
pub fn parse_order_outcomes(text: &str) -> anyhow::Result<Vec<OrderOutcome>> {
    let file = "solution_info_orders.txt";
    let mut lines = text.lines();
    let header = Header::from_whitespace(lines.next().ok_or_else(|| anyhow!("empty {file}"))?);
    let order = header.column("order", file)?;
    let placement = header.column("placement_time", file)?;
    let ready = header.column("ready_time", file)?;
    let pickup = header.column("pickup_time", file)?;
    let dropoff = header.column("dropoff_time", file)?;
    let courier = header.column("courier", file)?;

    let mut outcomes = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let width = [order, placement, ready, pickup, dropoff, courier]
            .into_iter()
            .max()
            .unwrap_or(0);
        if fields.len() <= width {
            warn!("skipping short outcome line: {line:?}");
            continue;
        }
        // repeated header rows show up in concatenated solution files
        if fields[order] == "order" {
            continue;
        }
        outcomes.push(OrderOutcome {
            order: fields[order].to_string(),
            placement_time: coerce_time(fields[placement]),
            ready_time: coerce_time(fields[ready]),
            pickup_time: coerce_time(fields[pickup]),
            dropoff_time: coerce_time(fields[dropoff]),
            courier: match fields[courier] {
                "nan" | "NaN" | "None" => None,
                id => Some(id.to_string()),
            },
        });
    }
    Ok(outcomes)
}

/// Movement log: courier, departure_time, origin, destination per row.
/// A header line is auto-detected by its non-numeric second field.
/// Origin "0" stands for the courier's own current position. Rows are
/// grouped per courier in order of appearance; a courier appearing in
/// several blocks keeps one merged, ordered move list.
pub fn parse_courier_moves(text: &str) -> Vec<CourierLog> {
    let mut logs: Vec<CourierLog> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 4 {
            warn!("skipping malformed courier log line: {line:?}");
            continue;
        }
        let Ok(departure_time) = int_via_float(fields[1]) else {
            debug!("detected header line: {line:?}");
            continue;
        };
        let courier = fields[0];
        let origin = if fields[2] == "0" { courier } else { fields[2] };

        let slot = *index.entry(courier.to_string()).or_insert_with(|| {
            logs.push(CourierLog {
                courier: courier.to_string(),
                moves: Vec::new(),
            });
            logs.len() - 1
        });
        logs[slot].moves.push(CourierMove {
            departure_time,
            origin: origin.to_string(),
            destination: fields[3].to_string(),
        });
    }

    logs
}
