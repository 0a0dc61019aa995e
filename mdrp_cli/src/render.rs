use std::fmt::Write;

use comfy_table::{Cell, CellAlignment, Table, presets};
use mdrp_validator::{
    check::FeasibilityReport,
    performance::{MetricColumn, PerformanceSummary},
};

/// Renders the per-rule sections and the final verdict line.
pub fn feasibility_text(report: &FeasibilityReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        if section.passed() {
            let _ = writeln!(out, "{}: OK", section.ok_label);
        } else {
            let _ = writeln!(out, "{}:", section.failure_label);
            for violation in &section.violations {
                let _ = writeln!(out, "{violation}");
            }
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(
        out,
        "{}",
        if report.feasible() {
            "FEASIBLE"
        } else {
            "INFEASIBLE"
        }
    );
    out
}

/// Renders the headline numbers and the three statistics tables.
pub fn performance_text(summary: &PerformanceSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "number of orders delivered: {} out of {}",
        summary.total_delivered, summary.total_orders
    );
    if let Some(total_cost) = summary.total_cost {
        let _ = writeln!(out, "total payment: {total_cost:.2}");
    }
    if let Some(proportion) = summary.proportion_trueup {
        let _ = writeln!(
            out,
            "proportion of couriers receiving minimum guaranteed compensation: {proportion:.2}"
        );
    }

    for columns in [&summary.order_stats, &summary.courier_stats, &summary.bundle_stats]
        .into_iter()
        .flatten()
    {
        let _ = writeln!(out, "\n{}", stats_table(columns));
    }

    out
}

fn stats_table(columns: &[MetricColumn]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);

    let mut header = vec![Cell::new("")];
    header.extend(columns.iter().map(|c| Cell::new(c.name)));
    table.set_header(header);

    let rows: [(&str, fn(&MetricColumn) -> f64); 7] = [
        ("count", |c| c.stats.count as f64),
        ("mean", |c| c.stats.mean),
        ("std", |c| c.stats.std),
        ("min", |c| c.stats.min),
        ("10%", |c| c.stats.p10),
        ("90%", |c| c.stats.p90),
        ("max", |c| c.stats.max),
    ];
    for (label, value) in rows {
        let mut row = vec![Cell::new(label)];
        row.extend(columns.iter().map(|c| {
            Cell::new(format!("{:.2}", value(c))).set_alignment(CellAlignment::Right)
        }));
        table.add_row(row);
    }

    table
}
