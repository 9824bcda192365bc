//! Comment handlers

use crate::error::ApiError;
use crate::extractors::{ValidJson, ValidPath};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use social_core::{Comment, CommentIn, RecordId};

pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CommentIn>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state.feed.create_comment(&input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Comments on one post, empty when the post has none or does not exist
pub async fn list_for_post(
    State(state): State<AppState>,
    ValidPath(post_id): ValidPath<RecordId>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = state.feed.list_comments(post_id).await?;
    Ok(Json(comments))
}
