use std::path::Path;

use anyhow::{Context, Result};
use askama::Template;
use chrono::{DateTime, Utc};

use super::{fit_content, Category, Report, RunContext};

/// Pre-computed benchmark comparison, e.g. `benchstat` output.
#[derive(Debug, Clone)]
pub(crate) struct Benchmark {
    comparison: String,
}

impl Benchmark {
    pub(crate) fn new(comparison: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
        }
    }

    pub(crate) async fn read(path: &Path) -> Result<Self> {
        let comparison = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read benchmark results from {}", path.display()))?;
        Ok(Self::new(comparison))
    }

    fn make(&self, run: &RunContext, now: DateTime<Utc>) -> Result<String> {
        Ok(BenchmarkComment {
            content: &fit_content(self.comparison.trim()),
            run_url: run.run_url(),
            now,
        }
        .render()?)
    }
}

#[derive(Template)]
#[template(path = "benchmark.md.j2", escape = "none")]
struct BenchmarkComment<'a> {
    content: &'a str,
    run_url: Option<String>,
    now: DateTime<Utc>,
}

impl Report for Benchmark {
    fn category(&self) -> Category {
        Category::Benchmark
    }

    fn render(&self, run: &RunContext) -> Result<String> {
        self.make(run, Utc::now())
    }
}
