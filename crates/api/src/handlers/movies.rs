//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinerate_core::error::CoreError;
use cinerate_core::types::DbId;
use cinerate_db::models::movie::{CreateMovie, Movie, PatchMovie};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.get_all_movies().await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .get_movie_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Movie", id))?;
    Ok(Json(movie))
}

/// GET /movies/genre/{genre}
pub async fn get_by_genre(
    State(state): State<AppState>,
    PathParam(genre): PathParam<String>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .get_movie_by_genre(&genre)
        .await?
        .ok_or_else(|| CoreError::not_found_by("Movie", "genre", &genre))?;
    Ok(Json(movie))
}

/// GET /movies/title/{letter}
pub async fn get_by_first_letter(
    State(state): State<AppState>,
    PathParam(letter): PathParam<String>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .get_movie_by_first_letter(&letter)
        .await?
        .ok_or_else(|| CoreError::not_found_by("Movie", "title initial", &letter))?;
    Ok(Json(movie))
}

/// GET /movies/year/{year}
pub async fn get_by_year(
    State(state): State<AppState>,
    PathParam(year): PathParam<i32>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .get_movie_by_year(year)
        .await?
        .ok_or_else(|| CoreError::not_found_by("Movie", "release year", year))?;
    Ok(Json(movie))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.movies.create_movie(&input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies
///
/// The body carries the id of the movie to change plus any fields to merge.
pub async fn patch(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PatchMovie>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .movies
        .patch_movie(&input)
        .await?
        .ok_or_else(|| CoreError::not_found("Movie", input.id))?;

    tracing::info!(movie_id = movie.id, "Movie patched");

    Ok(Json(movie))
}
