use crate::thread::{Comment, CommentId, ThreadRef};

mod dry_run;
mod github;

pub(crate) use dry_run::DryRunStore;
pub(crate) use github::GitHubStore;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("thread {0} does not exist")]
    NotFound(ThreadRef),
    #[error("comment {id} on {thread} no longer exists")]
    CommentGone { thread: ThreadRef, id: CommentId },
    #[error("comment store request failed: {0}")]
    Transport(#[source] BoxError),
}

/// System of record for threads and their comments.
pub(crate) trait CommentStore {
    /// The `page_size` most recent comments on `thread`, oldest first.
    async fn list_comments(
        &self,
        thread: &ThreadRef,
        page_size: u8,
    ) -> Result<Vec<Comment>, StoreError>;

    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment, StoreError>;

    async fn update_comment(
        &self,
        thread: &ThreadRef,
        id: CommentId,
        body: &str,
    ) -> Result<Comment, StoreError>;
}
