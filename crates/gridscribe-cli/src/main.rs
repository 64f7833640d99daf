//! gridscribe CLI - Draw text on a contribution graph
//!
//! This binary renders a text string over the 7-row weekly grid of a
//! contribution heatmap and either previews the result or appends
//! today's record to the idempotent log file.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridscribe_cli::cli_args::Cli;
use gridscribe_cli::commands;
use gridscribe_cli::resolve::resolve;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "gridscribe=info".to_string()),
        ))
        .init();

    let result = run(&cli);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let resolved = resolve(cli)?;
    let today = chrono::Local::now().date_naive();

    if cli.preview {
        commands::preview::run(
            &resolved.settings,
            resolved.font_width,
            resolved.preview_weeks,
            cli.list_dates,
            cli.json,
            today,
        )
    } else {
        commands::mark::run(
            &resolved.settings,
            resolved.font_width,
            cli.mutation_token.as_deref(),
            today,
        )
    }
}
