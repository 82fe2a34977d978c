use anyhow::Result;
use askama::Template;

use super::{Category, Report, RunContext};

/// Notice that a lint step failed. Carries no findings of its own.
#[derive(Debug, Clone)]
pub(crate) struct Lint {
    tool: String,
}

impl Lint {
    pub(crate) fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

#[derive(Template)]
#[template(path = "lint.md.j2", escape = "none")]
struct LintComment<'a> {
    tool: &'a str,
    run_url: Option<String>,
}

impl Report for Lint {
    fn category(&self) -> Category {
        Category::Lint
    }

    fn render(&self, run: &RunContext) -> Result<String> {
        Ok(LintComment {
            tool: &self.tool,
            run_url: run.run_url(),
        }
        .render()?)
    }
}
