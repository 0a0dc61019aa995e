use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use mdrp_validator::{
    check::check,
    parsers::{read_instance, read_solution},
    performance::summarize,
    timeline::build_timelines,
};
use tracing::info;

use crate::render;

#[derive(Args)]
pub struct CheckArgs {
    /// Directory containing orders.txt, restaurants.txt, couriers.txt
    /// and instance_parameters.txt
    #[arg(long)]
    instance_dir: PathBuf,

    /// Directory containing the solution_info_* files
    /// (defaults to the instance directory)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory the report files are written to, created if absent
    /// (defaults to the instance directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let instance_dir = args.instance_dir;
    let input_dir = args.input_dir.unwrap_or_else(|| instance_dir.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| instance_dir.clone());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    info!("reading instance information from {}", instance_dir.display());
    let instance = read_instance(&instance_dir)?;
    info!("reading solution information from {}", input_dir.display());
    let solution = read_solution(&input_dir)?;

    info!("checking feasibility of the solution");
    let timelines = build_timelines(&instance, &solution)?;
    let outcome = check(&instance, &solution, &timelines);

    let feasibility_path = output_dir.join("feasibility_check.txt");
    fs::write(&feasibility_path, render::feasibility_text(&outcome.report))
        .with_context(|| format!("writing {}", feasibility_path.display()))?;

    if outcome.report.feasible() {
        info!("solution is feasible");
        info!("computing solution performance metrics");
        let summary = summarize(&instance, &solution, &outcome.activity);
        let performance_path = output_dir.join("solution_performance.txt");
        fs::write(&performance_path, render::performance_text(&summary))
            .with_context(|| format!("writing {}", performance_path.display()))?;
        info!(
            "performance measures were written to {}",
            performance_path.display()
        );
    } else {
        info!(
            "solution is not feasible, see {} for details",
            feasibility_path.display()
        );
    }

    Ok(())
}
