//! Storage traits for posts and comments

use crate::Result;
use async_trait::async_trait;
use social_types::{Comment, Post, RecordId};

/// Post store
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Store a new post under the next free id
    async fn create(&self, body: &str) -> Result<Post>;
    async fn get(&self, id: RecordId) -> Result<Option<Post>>;
    /// All posts in insertion order
    async fn list_all(&self) -> Result<Vec<Post>>;
    async fn clear(&self) -> Result<()>;
}

/// Comment store
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fails with `SocialError::PostNotFound` when `post_id` does not resolve
    async fn create(&self, body: &str, post_id: RecordId) -> Result<Comment>;
    /// Comments on `post_id` in insertion order, empty if there are none
    async fn list_for_post(&self, post_id: RecordId) -> Result<Vec<Comment>>;
    async fn clear(&self) -> Result<()>;
}
