//! Keeps at most one live comment per report category on a thread.
//!
//! Comments are recognised by the invisible [`Marker`] embedded in their body.
//! Only the [`PAGE_SIZE`] most recent comments are searched, so a report
//! buried behind that many newer comments is missed and a second one gets
//! created. Two runs racing on the same thread can likewise both create a
//! comment; the next run then updates the newer of the two and leaves the
//! other one stale. No locking is attempted.

use std::fmt::Display;

use crate::constants::PAGE_SIZE;
use crate::store::{CommentStore, StoreError};
use crate::thread::{Comment, Marker, ThreadRef};

/// How a category's report is placed on the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Replace the latest comment carrying the marker, or create one.
    Upsert(Marker),
    /// Always append a new comment, keeping earlier runs visible.
    CreateOnly,
}

impl Placement {
    /// Finish a rendered report so that [`post`] can find it again later.
    pub(crate) fn seal(self, content: &str) -> String {
        match self {
            Placement::Upsert(marker) => format!("{}\n\n{marker}\n", content.trim_end()),
            Placement::CreateOnly => content.to_owned(),
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Placement::Upsert(_) => "upsert",
            Placement::CreateOnly => "create-only",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Posted {
    pub comment: Comment,
    pub action: Action,
}

pub(crate) async fn post<S: CommentStore>(
    store: &S,
    thread: &ThreadRef,
    placement: Placement,
    body: &str,
) -> Result<Posted, StoreError> {
    match placement {
        Placement::Upsert(marker) => upsert(store, thread, marker, body).await,
        Placement::CreateOnly => create(store, thread, body).await,
    }
}

/// Update the most recent comment containing `marker`, or create a new one.
///
/// Exactly one write is issued. Errors from the store are returned as is.
pub(crate) async fn upsert<S: CommentStore>(
    store: &S,
    thread: &ThreadRef,
    marker: Marker,
    body: &str,
) -> Result<Posted, StoreError> {
    if !marker.is_in(body) {
        tracing::warn!("Body for {thread} lacks its marker, the next run will not find it");
    }
    let comments = store.list_comments(thread, PAGE_SIZE).await?;
    let existing = comments.iter().rev().find(|c| marker.is_in(&c.body));
    let posted = if let Some(existing) = existing {
        tracing::info!("Updating comment {} on {thread}", existing.id);
        Posted {
            comment: store.update_comment(thread, existing.id, body).await?,
            action: Action::Updated,
        }
    } else {
        tracing::info!(
            "No marked comment among {} on {thread}, creating one",
            comments.len()
        );
        Posted {
            comment: store.create_comment(thread, body).await?,
            action: Action::Created,
        }
    };
    Ok(posted)
}

/// Append a new comment without looking at existing ones.
pub(crate) async fn create<S: CommentStore>(
    store: &S,
    thread: &ThreadRef,
    body: &str,
) -> Result<Posted, StoreError> {
    tracing::info!("Creating comment on {thread}");
    Ok(Posted {
        comment: store.create_comment(thread, body).await?,
        action: Action::Created,
    })
}
