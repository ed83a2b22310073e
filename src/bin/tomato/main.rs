mod cli;
mod setup;

use clap::Parser;
use snafu::{prelude::*, Whatever};

use crate::cli::Arguments;

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let args = Arguments::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(args.verbosity)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;

    let sequencer = setup::bootstrap(&args).whatever_context("Could not bootstrap application")?;

    tokio::select! {
        res = sequencer.run() => res.whatever_context("Timer failed to run")?,
        _ = tokio::signal::ctrl_c() => println!("\n👋 goodbye"),
    }

    Ok(())
}
