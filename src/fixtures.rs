use std::sync::Mutex;

use crate::store::{CommentStore, StoreError};
use crate::thread::{Comment, CommentId, ThreadRef};

/// Event payload of a `pull_request` workflow run (trimmed to what we read).
pub(crate) const PR_EVENT: &str = r#"{
  "action": "synchronize",
  "number": 1337,
  "pull_request": {
    "number": 1337,
    "base": { "sha": "a4786471ee4d4e894fec150e426c3551db0f31e0" },
    "head": { "sha": "f88f7bd4250b963752d615e491b7e676ce5eb7f0" }
  },
  "repository": { "full_name": "scverse/anndata" }
}"#;

/// Event payload of an `issue_comment` workflow run.
pub(crate) const ISSUE_COMMENT_EVENT: &str = r#"{
  "action": "created",
  "issue": { "number": 77, "pull_request": { "url": "https://api.github.com/repos/scverse/anndata/pulls/77" } },
  "comment": { "id": 1, "body": "/benchmark" }
}"#;

pub(crate) fn thread() -> ThreadRef {
    ThreadRef::new("scverse", "anndata", 1337).unwrap()
}

#[derive(Debug, Default)]
struct State {
    comments: Vec<Comment>,
    next_id: u64,
    writes: usize,
    fail: bool,
    fail_writes: bool,
}

/// In-memory comment store holding a single thread.
#[derive(Debug)]
pub(crate) struct MemoryStore {
    thread: ThreadRef,
    state: Mutex<State>,
}

impl MemoryStore {
    pub(crate) fn new(thread: &ThreadRef) -> Self {
        Self {
            thread: thread.clone(),
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
        }
    }

    /// Seed the thread with comments, oldest first, bypassing the write counter.
    pub(crate) fn with_bodies(thread: &ThreadRef, bodies: &[&str]) -> Self {
        let store = Self::new(thread);
        {
            let mut state = store.state.lock().unwrap();
            for body in bodies {
                let id = CommentId(state.next_id);
                state.next_id += 1;
                state.comments.push(Comment {
                    id,
                    body: (*body).to_owned(),
                    html_url: None,
                });
            }
        }
        store
    }

    /// Make every following call fail like a lost connection would.
    pub(crate) fn fail_requests(&self) {
        self.state.lock().unwrap().fail = true;
    }

    /// Let listing succeed but fail every create or update.
    pub(crate) fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub(crate) fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub(crate) fn comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.comments().into_iter().map(|c| c.body).collect()
    }

    fn check(&self, thread: &ThreadRef, state: &State) -> Result<(), StoreError> {
        if state.fail {
            return Err(StoreError::Transport("connection reset by peer".into()));
        }
        if *thread != self.thread {
            return Err(StoreError::NotFound(thread.clone()));
        }
        Ok(())
    }

    fn check_write(&self, thread: &ThreadRef, state: &State) -> Result<(), StoreError> {
        self.check(thread, state)?;
        if state.fail_writes {
            return Err(StoreError::Transport("403 Resource not accessible by integration".into()));
        }
        Ok(())
    }
}

impl CommentStore for MemoryStore {
    async fn list_comments(
        &self,
        thread: &ThreadRef,
        page_size: u8,
    ) -> Result<Vec<Comment>, StoreError> {
        let state = self.state.lock().unwrap();
        self.check(thread, &state)?;
        let skip = state.comments.len().saturating_sub(page_size.into());
        Ok(state.comments[skip..].to_vec())
    }

    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment, StoreError> {
        let mut state = self.state.lock().unwrap();
        self.check_write(thread, &state)?;
        let comment = Comment {
            id: CommentId(state.next_id),
            body: body.to_owned(),
            html_url: None,
        };
        state.next_id += 1;
        state.writes += 1;
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_comment(
        &self,
        thread: &ThreadRef,
        id: CommentId,
        body: &str,
    ) -> Result<Comment, StoreError> {
        let mut state = self.state.lock().unwrap();
        self.check_write(thread, &state)?;
        state.writes += 1;
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::CommentGone {
                thread: thread.clone(),
                id,
            })?;
        body.clone_into(&mut comment.body);
        Ok(comment.clone())
    }
}
