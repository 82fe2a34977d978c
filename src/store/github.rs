use std::sync::Arc;

use octocrab::{models::issues, Octocrab};
use serde::Deserialize;
use serde_json::json;

use super::{CommentStore, StoreError};
use crate::thread::{Comment, CommentId, ThreadRef};

/// Most recent comments of an issue or pull request. The REST listing only
/// pages forward from the oldest comment, GraphQL can ask for the last ones.
const LATEST_COMMENTS_QUERY: &str = "
query($owner: String!, $repo: String!, $number: Int!, $last: Int!) {
  repository(owner: $owner, name: $repo) {
    issueOrPullRequest(number: $number) {
      ... on Issue { comments(last: $last) { nodes { fullDatabaseId body url } } }
      ... on PullRequest { comments(last: $last) { nodes { fullDatabaseId body url } } }
    }
  }
}";

/// Comment store backed by the GitHub API.
#[derive(Debug, Clone)]
pub(crate) struct GitHubStore {
    github_client: Arc<Octocrab>,
}

impl GitHubStore {
    pub(crate) fn new(github_client: Arc<Octocrab>) -> Self {
        Self { github_client }
    }
}

/// Map an API error, turning a 404 into `not_found`.
fn classify(error: octocrab::Error, not_found: impl FnOnce() -> StoreError) -> StoreError {
    match error {
        octocrab::Error::GitHub { source, .. } if source.status_code == http::StatusCode::NOT_FOUND => {
            tracing::debug!("GitHub Error: {}", source.message);
            not_found()
        }
        e => StoreError::Transport(Box::new(e)),
    }
}

#[derive(Deserialize, Debug)]
struct LatestComments {
    data: Option<LatestCommentsData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize, Debug)]
struct LatestCommentsData {
    repository: Option<RepositoryNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    issue_or_pull_request: Option<ThreadNode>,
}

#[derive(Deserialize, Debug)]
struct ThreadNode {
    comments: CommentConnection,
}

#[derive(Deserialize, Debug)]
struct CommentConnection {
    nodes: Vec<Option<CommentNode>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CommentNode {
    /// BigInt, serialized as a string
    full_database_id: String,
    body: String,
    url: String,
}

#[derive(Deserialize, Debug)]
struct GraphQlError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

impl TryFrom<CommentNode> for Comment {
    type Error = StoreError;

    fn try_from(node: CommentNode) -> Result<Self, Self::Error> {
        let id = node.full_database_id.parse().map_err(|e| {
            StoreError::Transport(
                format!("invalid comment id {:?}: {e}", node.full_database_id).into(),
            )
        })?;
        Ok(Comment {
            id: CommentId(id),
            body: node.body,
            html_url: Some(node.url),
        })
    }
}

impl From<issues::Comment> for Comment {
    fn from(comment: issues::Comment) -> Self {
        Comment {
            id: CommentId(comment.id.into_inner()),
            body: comment.body.unwrap_or_default(),
            html_url: Some(comment.html_url.to_string()),
        }
    }
}

impl CommentStore for GitHubStore {
    async fn list_comments(
        &self,
        thread: &ThreadRef,
        page_size: u8,
    ) -> Result<Vec<Comment>, StoreError> {
        let payload = json!({
            "query": LATEST_COMMENTS_QUERY,
            "variables": {
                "owner": thread.owner,
                "repo": thread.repo,
                "number": thread.number,
                "last": page_size,
            },
        });
        let LatestComments { data, errors } = self
            .github_client
            .graphql(&payload)
            .await
            .map_err(|e| classify(e, || StoreError::NotFound(thread.clone())))?;
        let node = data
            .and_then(|data| data.repository)
            .and_then(|repository| repository.issue_or_pull_request);
        let errors = errors.unwrap_or_default();
        match node {
            Some(node) => node
                .comments
                .nodes
                .into_iter()
                .flatten()
                .map(Comment::try_from)
                .collect(),
            None if errors
                .iter()
                .all(|e| e.kind.as_deref() == Some("NOT_FOUND")) =>
            {
                Err(StoreError::NotFound(thread.clone()))
            }
            None => {
                let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
                Err(StoreError::Transport(messages.join("; ").into()))
            }
        }
    }

    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment, StoreError> {
        self.github_client
            .issues(&thread.owner, &thread.repo)
            .create_comment(thread.number, body)
            .await
            .map(Comment::from)
            .map_err(|e| classify(e, || StoreError::NotFound(thread.clone())))
    }

    async fn update_comment(
        &self,
        thread: &ThreadRef,
        id: CommentId,
        body: &str,
    ) -> Result<Comment, StoreError> {
        let route = format!(
            "/repos/{}/{}/issues/comments/{id}",
            thread.owner, thread.repo
        );
        self.github_client
            .patch::<issues::Comment, _, _>(route, Some(&json!({ "body": body })))
            .await
            .map(Comment::from)
            .map_err(|e| {
                classify(e, || StoreError::CommentGone {
                    thread: thread.clone(),
                    id,
                })
            })
    }
}
