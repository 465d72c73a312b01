use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{error::ApiError, model::Post, sample::SamplePosts, AppState};

/// Header attached to the single-post response.
const CUSTOM_HEADER: (&str, &str) = ("custom-header", "cc");

// Stub variant: every handler answers from the seeded sample data and
// nothing survives the request.

pub async fn get_post_handler(State(samples): State<Arc<SamplePosts>>) -> impl IntoResponse {
    ([CUSTOM_HEADER], Json(samples.featured.clone()))
}

pub async fn post_list_handler(State(samples): State<Arc<SamplePosts>>) -> impl IntoResponse {
    Json(samples.feed.clone())
}

pub async fn create_post_handler(Json(body): Json<Post>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(body))
}

pub async fn update_post_handler(
    Path(id): Path<i64>,
    Json(_body): Json<Post>,
) -> impl IntoResponse {
    tracing::debug!("acknowledged update for post {id}");
    "Post updated successfully"
}

pub async fn delete_post_handler(Path(id): Path<i64>) -> impl IntoResponse {
    tracing::debug!("acknowledged delete for post {id}");
    "Post deleted successfully"
}

// Persisted variant: create and list go through the store; the single-post
// read stays fixed, and update/delete are acknowledged without touching the
// store (prototype gap carried over on purpose).

pub async fn get_post_db_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ([CUSTOM_HEADER], Json(state.samples.featured.clone()))
}

pub async fn post_list_db_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state.store.find_all().await?;

    Ok(Json(posts))
}

pub async fn create_post_db_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Post>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = state.store.save(body).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update_post_db_handler(
    Path(id): Path<i64>,
    Json(_body): Json<Post>,
) -> impl IntoResponse {
    tracing::debug!("acknowledged update for post {id}");
    "Post updated successfully"
}

pub async fn delete_post_db_handler(Path(id): Path<i64>) -> impl IntoResponse {
    tracing::debug!("acknowledged delete for post {id}");
    "Post deleted successfully"
}
