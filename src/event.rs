use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A stripped down workflow event payload, as found at `GITHUB_EVENT_PATH`.
/// Only the fields identifying the pull request or issue are read.
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct WorkflowEvent {
    /// Set on `pull_request` and `pull_request_target` events.
    pub number: Option<u64>,
    pub pull_request: Option<Numbered>,
    /// Set on `issues` and `issue_comment` events.
    pub issue: Option<Numbered>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Numbered {
    pub number: u64,
}

impl WorkflowEvent {
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid event payload {}", path.display()))
    }

    pub(crate) fn issue_number(&self) -> Option<u64> {
        self.number
            .or_else(|| self.pull_request.as_ref().map(|pr| pr.number))
            .or_else(|| self.issue.as_ref().map(|issue| issue.number))
    }
}

#[cfg(test)]
mod tests {
    use test_temp_dir::test_temp_dir;

    use crate::fixtures::{ISSUE_COMMENT_EVENT, PR_EVENT};

    use super::*;

    #[test]
    fn test_pull_request() {
        let event = serde_json::from_str::<WorkflowEvent>(PR_EVENT).unwrap();
        assert_eq!(event.issue_number(), Some(1337));
    }

    #[test]
    fn test_issue_comment() {
        let event = serde_json::from_str::<WorkflowEvent>(ISSUE_COMMENT_EVENT).unwrap();
        assert_eq!(event.issue_number(), Some(77));
    }

    #[test]
    fn test_push() {
        let event = serde_json::from_str::<WorkflowEvent>(r#"{"ref": "refs/heads/main"}"#).unwrap();
        assert_eq!(event.issue_number(), None);
    }

    #[test]
    fn test_from_path() {
        let temp_dir = test_temp_dir!();
        temp_dir.used_by(|dir| {
            let path = dir.join("event.json");
            std::fs::write(&path, PR_EVENT).unwrap();
            assert_eq!(WorkflowEvent::from_path(&path).unwrap().issue_number(), Some(1337));
            assert!(WorkflowEvent::from_path(&dir.join("nope.json")).is_err());
        });
    }
}
