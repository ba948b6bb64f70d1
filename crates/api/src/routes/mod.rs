pub mod health;
pub mod movies;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                   list, create, patch
/// /users/{id}                              get by id
/// /users/ratings/{total_ratings}           get by total ratings
///
/// /movies                                  list, create, patch
/// /movies/{id}                             get by id
/// /movies/genre/{genre}                    first movie of a genre
/// /movies/title/{letter}                   first movie by title initial
/// /movies/year/{year}                      first movie of a release year
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/movies", movies::router())
}
