//! Post handlers

use crate::error::ApiError;
use crate::extractors::{ValidJson, ValidPath};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use social_core::{Post, PostWithComments, RecordId, UserPostIn};

pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UserPostIn>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.feed.create_post(&input.body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.feed.list_posts().await?;
    Ok(Json(posts))
}

/// Post joined with its comments; 404 when the post is unknown
pub async fn get(
    State(state): State<AppState>,
    ValidPath(post_id): ValidPath<RecordId>,
) -> Result<Json<PostWithComments>, ApiError> {
    let view = state.feed.post_with_comments(post_id).await?;
    Ok(Json(view))
}
