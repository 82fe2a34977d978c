#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Commands;
use crate::config::ReporterConfig;
use crate::engine::Action;
use crate::report::{Benchmark, Coverage, Lint, Report};
use crate::store::{DryRunStore, GitHubStore};

mod cli;
mod config;
mod constants;
mod engine;
mod event;
#[cfg(test)]
mod fixtures;
mod report;
mod store;
mod thread;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let mut cli = cli::Cli::parse();
    let config = cli
        .config
        .as_deref()
        .map(ReporterConfig::from_path)
        .transpose()?
        .unwrap_or_default();
    let thread = cli.github.thread()?;
    let run = cli.github.run_context();

    // Set global octocrab instance, authenticated if a token was provided
    octocrab::initialise(cli.github.try_into_octocrab()?);

    let report: Box<dyn Report> = match cli.command {
        Commands::Benchmark(args) => Box::new(Benchmark::read(&args.input).await?),
        Commands::Coverage(args) => Box::new(Coverage::read(&args.input).await),
        Commands::Lint(args) => Box::new(Lint::new(args.tool)),
    };
    let category = report.category();
    let placement = config.placement(category);
    let body = placement.seal(&report.render(&run)?);

    tracing::info!("Posting {category} report on {thread} ({placement})");
    let store = GitHubStore::new(octocrab::instance());
    let posted = if cli.dry_run {
        engine::post(&DryRunStore::new(store), &thread, placement, &body).await
    } else {
        engine::post(&store, &thread, placement, &body).await
    }
    .with_context(|| format!("failed to post {category} report on {thread}"))?;

    let verb = match posted.action {
        Action::Created => "Created",
        Action::Updated => "Updated",
    };
    if let Some(html_url) = posted.comment.html_url {
        tracing::info!("{verb} comment at {html_url}");
    } else {
        tracing::info!("{verb} comment {}", posted.comment.id);
    }
    Ok(())
}
