//! Social Media Server
//!
//! HTTP/JSON API over two in-memory resources, posts and comments.
//!
//! # Architecture
//!
//! - **AppState**: shared state owning the stores through [`FeedService`]
//! - **Storage**: DashMap-backed implementations of the `social-core` ports
//! - **Handlers**: endpoint handlers grouped by resource
//! - **Extractors**: schema validation turning rejections into 422 responses

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use social_core::ports::{CommentStore, PostStore};
use std::sync::Arc;

pub use config::ServerConfig;
pub use error::ApiError;
pub use services::FeedService;
use storage::{MemoryCommentStore, MemoryPostStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedService>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self {
            feed: Arc::new(FeedService::new(posts, comments)),
        }
    }

    /// Fresh, empty process-memory stores
    pub fn in_memory() -> Self {
        let posts: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
        let comments = Arc::new(MemoryCommentStore::new(posts.clone()));
        Self::new(posts, comments)
    }
}

/// Build the API router.
///
/// - `GET /` - Greeting
/// - `GET /health` - Health check
/// - `GET|POST /posts` - List / create posts
/// - `GET /posts/:post_id` - Post with its comments
/// - `GET /posts/:post_id/comments` - Comments on a post
/// - `POST /comments` - Create a comment
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/posts",
            get(handlers::posts::list).post(handlers::posts::create),
        )
        .route("/posts/:post_id", get(handlers::posts::get))
        .route(
            "/posts/:post_id/comments",
            get(handlers::comments::list_for_post),
        )
        .route("/comments", post(handlers::comments::create))
        .with_state(state)
}
