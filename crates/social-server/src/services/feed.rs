//! Feed service: posts, comments, and the post/comments join

use social_core::ports::{CommentStore, PostStore};
use social_core::{Comment, CommentIn, Post, PostWithComments, RecordId, Result, SocialError};
use std::sync::Arc;
use tracing::{debug, info};

pub struct FeedService {
    posts: Arc<dyn PostStore>,
    comments: Arc<dyn CommentStore>,
}

impl FeedService {
    pub fn new(posts: Arc<dyn PostStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self { posts, comments }
    }

    pub async fn create_post(&self, body: &str) -> Result<Post> {
        let post = self.posts.create(body).await?;
        info!("Created post {}", post.id);
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.posts.list_all().await
    }

    pub async fn find_post(&self, id: RecordId) -> Result<Option<Post>> {
        debug!("Looking up post {}", id);
        self.posts.get(id).await
    }

    pub async fn create_comment(&self, input: &CommentIn) -> Result<Comment> {
        let comment = self.comments.create(&input.body, input.post_id).await?;
        info!("Created comment {} on post {}", comment.id, comment.post_id);
        Ok(comment)
    }

    pub async fn list_comments(&self, post_id: RecordId) -> Result<Vec<Comment>> {
        debug!("Listing comments for post {}", post_id);
        self.comments.list_for_post(post_id).await
    }

    pub async fn post_with_comments(&self, post_id: RecordId) -> Result<PostWithComments> {
        let post = self
            .find_post(post_id)
            .await?
            .ok_or(SocialError::PostNotFound(post_id))?;
        let comments = self.list_comments(post_id).await?;

        Ok(PostWithComments { post, comments })
    }

    /// Drop every post and comment and restart id assignment at zero
    pub async fn reset(&self) -> Result<()> {
        info!("Resetting feed stores");
        self.comments.clear().await?;
        self.posts.clear().await
    }
}
