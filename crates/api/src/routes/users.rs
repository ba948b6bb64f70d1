//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// PATCH  /                          -> patch
/// GET    /{id}                      -> get_by_id
/// GET    /ratings/{total_ratings}   -> get_by_ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(users::list).post(users::create).patch(users::patch),
        )
        .route("/{id}", get(users::get_by_id))
        .route("/ratings/{total_ratings}", get(users::get_by_ratings))
}
