//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinerate_core::error::CoreError;
use cinerate_core::types::{DbId, RatingCount};
use cinerate_db::models::user::{CreateUser, PatchUser, User};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.get_all_users().await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    Ok(Json(user))
}

/// GET /users/ratings/{total_ratings}
pub async fn get_by_ratings(
    State(state): State<AppState>,
    PathParam(total_ratings): PathParam<RatingCount>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .get_user_by_ratings(total_ratings)
        .await?
        .ok_or_else(|| CoreError::not_found_by("User", "total ratings", total_ratings))?;
    Ok(Json(user))
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create_user(&input).await?;

    tracing::info!(user_id = user.id, handler = %user.handler, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /users
///
/// The body carries the id of the user to change plus any fields to merge.
pub async fn patch(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PatchUser>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .patch_user(&input)
        .await?
        .ok_or_else(|| CoreError::not_found("User", input.id))?;

    tracing::info!(user_id = user.id, "User patched");

    Ok(Json(user))
}
