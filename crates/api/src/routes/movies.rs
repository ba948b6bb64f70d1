//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// PATCH  /                  -> patch
/// GET    /{id}              -> get_by_id
/// GET    /genre/{genre}     -> get_by_genre
/// GET    /title/{letter}    -> get_by_first_letter
/// GET    /year/{year}       -> get_by_year
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movies::list).post(movies::create).patch(movies::patch),
        )
        .route("/{id}", get(movies::get_by_id))
        .route("/genre/{genre}", get(movies::get_by_genre))
        .route("/title/{letter}", get(movies::get_by_first_letter))
        .route("/year/{year}", get(movies::get_by_year))
}
