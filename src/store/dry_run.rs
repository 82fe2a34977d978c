use super::{CommentStore, StoreError};
use crate::thread::{Comment, CommentId, ThreadRef};

/// Reads from the wrapped store but only prints what it would write.
#[derive(Debug)]
pub(crate) struct DryRunStore<S> {
    inner: S,
}

impl<S> DryRunStore<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: CommentStore> CommentStore for DryRunStore<S> {
    async fn list_comments(
        &self,
        thread: &ThreadRef,
        page_size: u8,
    ) -> Result<Vec<Comment>, StoreError> {
        self.inner.list_comments(thread, page_size).await
    }

    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment, StoreError> {
        tracing::info!("--dry-run: would create a comment on {thread}");
        println!("{body}");
        Ok(Comment {
            id: CommentId(0),
            body: body.to_owned(),
            html_url: None,
        })
    }

    async fn update_comment(
        &self,
        thread: &ThreadRef,
        id: CommentId,
        body: &str,
    ) -> Result<Comment, StoreError> {
        tracing::info!("--dry-run: would update comment {id} on {thread}");
        println!("{body}");
        Ok(Comment {
            id,
            body: body.to_owned(),
            html_url: None,
        })
    }
}
