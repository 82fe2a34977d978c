use std::fmt::Display;

use crate::constants::{BENCHMARK_MARKER, COVERAGE_MARKER, LINT_MARKER, MAX_BODY_LEN};
use crate::thread::Marker;
use crate::utils::clamp_lines;

mod benchmark;
mod coverage;
mod lint;

pub(crate) use benchmark::Benchmark;
pub(crate) use coverage::Coverage;
pub(crate) use lint::Lint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Benchmark,
    Coverage,
    Lint,
}

impl Category {
    pub(crate) fn marker(self) -> Marker {
        match self {
            Category::Benchmark => BENCHMARK_MARKER,
            Category::Coverage => COVERAGE_MARKER,
            Category::Lint => LINT_MARKER,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Benchmark => "benchmark",
            Category::Coverage => "coverage",
            Category::Lint => "lint",
        })
    }
}

/// Where the CI run producing a report can be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunContext {
    pub server_url: String,
    pub repository: String,
    pub run_id: Option<String>,
}

impl RunContext {
    pub(crate) fn run_url(&self) -> Option<String> {
        self.run_id.as_ref().map(|run_id| {
            format!(
                "{}/{}/actions/runs/{run_id}",
                self.server_url.trim_end_matches('/'),
                self.repository
            )
        })
    }
}

/// A report that can be turned into a comment body (without marker).
pub(crate) trait Report {
    fn category(&self) -> Category;
    fn render(&self, run: &RunContext) -> anyhow::Result<String>;
}

const TRUNCATION_NOTICE: &str = "\n\n… (output truncated, see the CI logs for the full text)";
/// Room kept free for the notice, the marker, and the separating newlines.
const RESERVED_LEN: usize = 256;

/// Shorten raw report text so the finished comment stays under GitHub's limit.
pub(crate) fn fit_content(text: &str) -> std::borrow::Cow<'_, str> {
    let clamped = clamp_lines(text, MAX_BODY_LEN - RESERVED_LEN - TRUNCATION_NOTICE.len());
    if clamped.len() == text.len() {
        text.into()
    } else {
        tracing::warn!("Report of {} bytes truncated to {}", text.len(), clamped.len());
        format!("{clamped}{TRUNCATION_NOTICE}").into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(run_id: Option<&str>) -> RunContext {
        RunContext {
            server_url: "https://github.com/".to_owned(),
            repository: "scverse/anndata".to_owned(),
            run_id: run_id.map(str::to_owned),
        }
    }

    #[test]
    fn test_run_url() {
        assert_eq!(
            run(Some("123")).run_url().as_deref(),
            Some("https://github.com/scverse/anndata/actions/runs/123")
        );
        assert_eq!(run(None).run_url(), None);
    }

    #[test]
    fn test_markers_distinct() {
        let markers = [Category::Benchmark, Category::Coverage, Category::Lint].map(Category::marker);
        for (i, a) in markers.iter().enumerate() {
            for b in &markers[i + 1..] {
                assert!(!a.as_str().contains(b.as_str()) && !b.as_str().contains(a.as_str()));
            }
        }
    }

    #[test]
    fn test_fit_content_short() {
        assert!(matches!(fit_content("a | b"), std::borrow::Cow::Borrowed("a | b")));
    }

    #[test]
    fn test_fit_content_long() {
        let line = "x".repeat(99) + "\n";
        let text = line.repeat(1000);
        let fitted = fit_content(&text);
        assert!(fitted.len() < MAX_BODY_LEN - RESERVED_LEN + 1);
        assert!(fitted.ends_with("see the CI logs for the full text)"));
        assert!(fitted.starts_with(&line));
    }
}
