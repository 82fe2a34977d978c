use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use askama::Template;
use regex::Regex;

use super::{Category, Report, RunContext};
use crate::constants::{COVERAGE_FALLBACK, COVERAGE_TOTAL_TOKEN};

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?%$").expect("valid regex"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum FormatError {
    #[error("no line containing `{COVERAGE_TOTAL_TOKEN}` in coverage summary")]
    MissingTotal,
    #[error("no percentage on coverage total line {0:?}")]
    MissingPercentage(String),
}

/// Find the total coverage percentage in a `go tool cover -func` style summary.
pub(crate) fn extract_total(summary: &str) -> Result<&str, FormatError> {
    let line = summary
        .lines()
        .find(|line| line.contains(COVERAGE_TOTAL_TOKEN))
        .ok_or(FormatError::MissingTotal)?;
    line.split_whitespace()
        .rev()
        .find(|field| PERCENTAGE.is_match(field))
        .ok_or_else(|| FormatError::MissingPercentage(line.to_owned()))
}

/// Total coverage of a test run, or the fallback if it could not be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Coverage {
    total: String,
}

impl Coverage {
    pub(crate) fn from_summary(summary: &str) -> Self {
        let total = extract_total(summary).unwrap_or_else(|e| {
            tracing::warn!("{e}, reporting {COVERAGE_FALLBACK}");
            COVERAGE_FALLBACK
        });
        Self {
            total: total.to_owned(),
        }
    }

    /// Best effort: an unreadable summary yields the fallback value.
    pub(crate) async fn read(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(summary) => Self::from_summary(&summary),
            Err(e) => {
                tracing::warn!(
                    "Could not read coverage summary {}: {e}, reporting {COVERAGE_FALLBACK}",
                    path.display()
                );
                Self {
                    total: COVERAGE_FALLBACK.to_owned(),
                }
            }
        }
    }
}

#[derive(Template)]
#[template(path = "coverage.md.j2", escape = "none")]
struct CoverageComment<'a> {
    total: &'a str,
    run_url: Option<String>,
}

impl Report for Coverage {
    fn category(&self) -> Category {
        Category::Coverage
    }

    fn render(&self, run: &RunContext) -> Result<String> {
        Ok(CoverageComment {
            total: &self.total,
            run_url: run.run_url(),
        }
        .render()?)
    }
}
