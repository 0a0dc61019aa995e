use clap::Parser;

use crate::run::CheckArgs;

mod render;
mod run;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: CheckArgs,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    run::run(cli.args)
}
