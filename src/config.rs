use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::Placement;
use crate::report::Category;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Mode {
    /// Keep a single comment per category, updated on every run.
    Upsert,
    /// Post a new comment on every run.
    CreateOnly,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct CategoryConfig {
    pub mode: Mode,
}

impl CategoryConfig {
    fn upsert() -> Self {
        Self { mode: Mode::Upsert }
    }

    fn create_only() -> Self {
        Self {
            mode: Mode::CreateOnly,
        }
    }
}

/// Per-category comment policy, read from a JSON5 file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReporterConfig {
    #[serde(default = "CategoryConfig::upsert")]
    pub benchmark: CategoryConfig,
    #[serde(default = "CategoryConfig::upsert")]
    pub coverage: CategoryConfig,
    /// Lint failures stay visible per run by default
    #[serde(default = "CategoryConfig::create_only")]
    pub lint: CategoryConfig,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            benchmark: CategoryConfig::upsert(),
            coverage: CategoryConfig::upsert(),
            lint: CategoryConfig::create_only(),
        }
    }
}

impl ReporterConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json5::from_str(contents)?)
    }

    pub(crate) fn placement(&self, category: Category) -> Placement {
        let config = match category {
            Category::Benchmark => self.benchmark,
            Category::Coverage => self.coverage,
            Category::Lint => self.lint,
        };
        match config.mode {
            Mode::Upsert => Placement::Upsert(category.marker()),
            Mode::CreateOnly => Placement::CreateOnly,
        }
    }
}
