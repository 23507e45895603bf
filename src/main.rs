mod cli;
mod tables;

use clap::{Parser, crate_version};
use tracing::info;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");
    Args::parse().run()
}
