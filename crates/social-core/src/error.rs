//! Error types for the social backend

use crate::RecordId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SocialError>;

#[derive(Error, Debug)]
pub enum SocialError {
    #[error("Post not found: {0}")]
    PostNotFound(RecordId),

    /// Backend failure from a fallible `PostStore`/`CommentStore`. The
    /// in-memory stores never return it; a persistent backend would.
    #[error("Storage error: {0}")]
    Storage(String),
}
