//! In-memory post and comment stores using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use social_core::ports::{CommentStore, PostStore};
use social_core::{Comment, Post, RecordId, Result, SocialError};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Posts keyed by id, ids handed out by an atomic counter
pub struct MemoryPostStore {
    data: DashMap<RecordId, Post>,
    next_id: AtomicI64,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            next_id: AtomicI64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, body: &str) -> Result<Post> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post::new(id, body);
        self.data.insert(id, post.clone());
        Ok(post)
    }

    async fn get(&self, id: RecordId) -> Result<Option<Post>> {
        Ok(self.data.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = self.data.iter().map(|entry| entry.value().clone()).collect();
        posts.sort_by_key(|post| post.id);
        Ok(posts)
    }

    async fn clear(&self) -> Result<()> {
        self.data.clear();
        self.next_id.store(0, Ordering::SeqCst);
        Ok(())
    }
}

/// Comments keyed by id, with a secondary index from post id to comment ids.
///
/// Post existence is checked against the shared post store at creation time.
pub struct MemoryCommentStore {
    posts: Arc<dyn PostStore>,
    data: DashMap<RecordId, Comment>,
    by_post: DashMap<RecordId, Vec<RecordId>>,
    next_id: AtomicI64,
}

impl MemoryCommentStore {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self {
            posts,
            data: DashMap::new(),
            by_post: DashMap::new(),
            next_id: AtomicI64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn create(&self, body: &str, post_id: RecordId) -> Result<Comment> {
        if self.posts.get(post_id).await?.is_none() {
            debug!("Rejecting comment for unknown post {}", post_id);
            return Err(SocialError::PostNotFound(post_id));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let comment = Comment::new(id, body, post_id);

        // Record first, index second: every indexed id resolves
        self.data.insert(id, comment.clone());
        self.by_post.entry(post_id).or_default().push(id);

        Ok(comment)
    }

    async fn list_for_post(&self, post_id: RecordId) -> Result<Vec<Comment>> {
        let ids = self
            .by_post
            .get(&post_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        let mut comments: Vec<Comment> = ids
            .into_iter()
            .filter_map(|id| self.data.get(&id).map(|entry| entry.value().clone()))
            .collect();
        comments.sort_by_key(|comment| comment.id);
        Ok(comments)
    }

    async fn clear(&self) -> Result<()> {
        self.by_post.clear();
        self.data.clear();
        self.next_id.store(0, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> (Arc<MemoryPostStore>, MemoryCommentStore) {
        let posts = Arc::new(MemoryPostStore::new());
        let comments = MemoryCommentStore::new(posts.clone());
        (posts, comments)
    }

    #[tokio::test]
    async fn test_post_ids_are_sequential() {
        let (posts, _) = stores();

        let first = posts.create("test post").await.unwrap();
        let second = posts.create("another").await.unwrap();

        assert_eq!(first, Post::new(0, "test post"));
        assert_eq!(second.id, 1);
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_post_get_and_list() {
        let (posts, _) = stores();
        assert_eq!(posts.get(0).await.unwrap(), None);

        for body in ["a", "b", "c"] {
            posts.create(body).await.unwrap();
        }

        assert_eq!(posts.get(1).await.unwrap(), Some(Post::new(1, "b")));
        let bodies: Vec<String> = posts
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.body)
            .collect();
        assert_eq!(bodies, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_comment_requires_post() {
        let (_, comments) = stores();

        let err = comments.create("orphan", 999).await.unwrap_err();
        assert!(matches!(err, SocialError::PostNotFound(999)));
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_negative_ids_are_unknown() {
        let (posts, comments) = stores();
        posts.create("a").await.unwrap();

        assert_eq!(posts.get(-1).await.unwrap(), None);
        assert!(comments.list_for_post(-1).await.unwrap().is_empty());
        let err = comments.create("orphan", -1).await.unwrap_err();
        assert!(matches!(err, SocialError::PostNotFound(-1)));
    }

    #[tokio::test]
    async fn test_comments_filtered_by_post() {
        let (posts, comments) = stores();
        let a = posts.create("a").await.unwrap();
        let b = posts.create("b").await.unwrap();

        comments.create("on a", a.id).await.unwrap();
        comments.create("on b", b.id).await.unwrap();
        comments.create("on a again", a.id).await.unwrap();

        let on_a = comments.list_for_post(a.id).await.unwrap();
        assert_eq!(
            on_a,
            vec![Comment::new(0, "on a", 0), Comment::new(2, "on a again", 0)]
        );
        assert_eq!(comments.list_for_post(b.id).await.unwrap().len(), 1);
        assert!(comments.list_for_post(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_ids() {
        let (posts, comments) = stores();
        let post = posts.create("a").await.unwrap();
        comments.create("c", post.id).await.unwrap();

        comments.clear().await.unwrap();
        posts.clear().await.unwrap();

        assert!(posts.is_empty());
        assert!(comments.list_for_post(post.id).await.unwrap().is_empty());
        assert_eq!(posts.create("fresh").await.unwrap().id, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let posts = Arc::new(MemoryPostStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let posts = posts.clone();
                tokio::spawn(async move { posts.create(&format!("post {}", i)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (0..64).collect::<Vec<_>>());
        assert_eq!(posts.list_all().await.unwrap().len(), 64);
    }
}
