mod cli;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::commands::run_cli;
use cli::opts::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();

    // The TUI owns the terminal, so keep it quiet unless RUST_LOG says otherwise
    let default_filter = match args.cmd {
        Command::Tui => "leitner=error",
        _ => "leitner=info,leitner_core=info,leitner_json=info",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run_cli(args)
}
