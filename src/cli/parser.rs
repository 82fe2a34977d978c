use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

use crate::event::WorkflowEvent;
use crate::report::RunContext;
use crate::thread::ThreadRef;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) github: GitHubArgs,
    /// Print the comment instead of posting it
    #[arg(long, global = true)]
    pub(crate) dry_run: bool,
    /// JSON5 file choosing upsert or create-only per report category
    #[arg(long, env = "PR_REPORTER_CONFIG", global = true)]
    pub(crate) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Post pre-computed benchmark comparison results
    Benchmark(BenchmarkArgs),
    /// Post the total test coverage
    Coverage(CoverageArgs),
    /// Report a failed lint step
    Lint(LintArgs),
}

#[derive(Args)]
pub(crate) struct BenchmarkArgs {
    /// Comparison text, e.g. `benchstat` output
    #[arg(long, default_value = "benchstat.txt")]
    pub(crate) input: PathBuf,
}

#[derive(Args)]
pub(crate) struct CoverageArgs {
    /// Coverage summary as printed by `go tool cover -func`
    #[arg(long, default_value = "coverage.out")]
    pub(crate) input: PathBuf,
}

#[derive(Args)]
pub(crate) struct LintArgs {
    /// Name of the lint tool that failed
    #[arg(long, default_value = "GolangCI-Lint")]
    pub(crate) tool: String,
}

/// Where to post, as provided by the GitHub Actions environment.
#[derive(Args, Debug, Default)]
pub(crate) struct GitHubArgs {
    /// Repository as `owner/repo`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub(crate) repository: String,
    /// Pull request or issue number (default: taken from the event payload)
    #[arg(long, env = "PR_NUMBER")]
    pub(crate) pr: Option<u64>,
    /// Workflow event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub(crate) event_path: Option<PathBuf>,
    #[arg(long, env = "GITHUB_SERVER_URL", default_value = "https://github.com")]
    pub(crate) server_url: String,
    /// Workflow run to link to
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub(crate) run_id: Option<String>,
    /// REST API root, for GitHub Enterprise Server
    #[arg(long, env = "GITHUB_API_URL")]
    pub(crate) api_url: Option<String>,
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_parser = parse_secret)]
    pub(crate) token: Option<SecretString>,
}

fn parse_secret(value: &str) -> Result<SecretString, std::convert::Infallible> {
    Ok(SecretString::new(value.to_owned()))
}

impl GitHubArgs {
    pub(crate) fn thread(&self) -> Result<ThreadRef> {
        let number = match (self.pr, &self.event_path) {
            (Some(pr), _) => pr,
            (None, Some(event_path)) => WorkflowEvent::from_path(event_path)?
                .issue_number()
                .with_context(|| {
                    format!("event payload {} names no pull request", event_path.display())
                })?,
            (None, None) => anyhow::bail!("no pull request given, pass --pr or GITHUB_EVENT_PATH"),
        };
        Ok(ThreadRef::from_slug(&self.repository, number)?)
    }

    pub(crate) fn run_context(&self) -> RunContext {
        RunContext {
            server_url: self.server_url.clone(),
            repository: self.repository.clone(),
            run_id: self.run_id.clone(),
        }
    }
}
