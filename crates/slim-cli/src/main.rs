//! tokslim: estimate, shrink and price agent context files.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod html;
mod output;
mod report;

use commands::Cli;

/// Logs go to stderr so reports on stdout stay pipeable.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "tokslim=debug,slim_compactor=debug,slim_storage=debug,slim_pricing=debug,slim_core=debug"
    } else {
        "tokslim=info,slim_storage=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
