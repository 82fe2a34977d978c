use std::fmt::Display;

/// Errors building a [`ThreadRef`] from user input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ThreadRefError {
    #[error("repository must look like `owner/repo`, got {0:?}")]
    Repository(String),
    #[error("issue number must be positive")]
    Number,
}

/// A discussion thread on the hosting system: one issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ThreadRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl ThreadRef {
    pub(crate) fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Result<Self, ThreadRefError> {
        let (owner, repo) = (owner.into(), repo.into());
        if owner.is_empty() || repo.is_empty() {
            return Err(ThreadRefError::Repository(format!("{owner}/{repo}")));
        }
        if number == 0 {
            return Err(ThreadRefError::Number);
        }
        Ok(Self {
            owner,
            repo,
            number,
        })
    }

    /// Build from a `owner/repo` slug as found in `GITHUB_REPOSITORY`.
    pub(crate) fn from_slug(slug: &str, number: u64) -> Result<Self, ThreadRefError> {
        match slug.split_once('/') {
            Some((owner, repo)) if !repo.contains('/') => Self::new(owner, repo, number)
                .map_err(|e| match e {
                    ThreadRefError::Repository(_) => ThreadRefError::Repository(slug.to_owned()),
                    e => e,
                }),
            _ => Err(ThreadRefError::Repository(slug.to_owned())),
        }
    }
}

impl Display for ThreadRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CommentId(pub u64);

impl Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Comment {
    pub id: CommentId,
    pub body: String,
    pub html_url: Option<String>,
}

/// Invisible sentinel identifying which report a comment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker(&'static str);

impl Marker {
    pub(crate) const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }

    pub(crate) fn is_in(self, body: &str) -> bool {
        body.contains(self.0)
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_from_slug() {
        let thread = ThreadRef::from_slug("scverse/anndata", 42).unwrap();
        assert_eq!(thread.owner, "scverse");
        assert_eq!(thread.repo, "anndata");
        assert_eq!(thread.to_string(), "scverse/anndata#42");
    }

    #[rstest]
    #[case("anndata")]
    #[case("/anndata")]
    #[case("scverse/")]
    #[case("a/b/c")]
    #[case("")]
    fn test_from_slug_invalid(#[case] slug: &str) {
        assert_eq!(
            ThreadRef::from_slug(slug, 1),
            Err(ThreadRefError::Repository(slug.to_owned()))
        );
    }

    #[test]
    fn test_zero_number() {
        assert_eq!(ThreadRef::new("o", "r", 0), Err(ThreadRefError::Number));
    }

    #[test]
    fn test_marker_is_in() {
        let marker = Marker::new("<!-- marker-a -->");
        assert!(marker.is_in("### Report A\n...\n<!-- marker-a -->"));
        assert!(!marker.is_in("### Report B\n...\n<!-- marker-b -->"));
    }
}
