use async_trait::async_trait;
use cinerate_core::types::DbId;
use cinerate_db::models::movie::{CreateMovie, Movie, PatchMovie};
use cinerate_db::repositories::MovieRepo;
use cinerate_db::DbPool;

use crate::error::AppResult;

/// Movie operations exposed to the `/movies` handlers.
///
/// The filtered lookups resolve to the first matching movie, or `None`.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_all_movies(&self) -> AppResult<Vec<Movie>>;

    async fn get_movie_by_id(&self, id: DbId) -> AppResult<Option<Movie>>;

    async fn get_movie_by_genre(&self, genre: &str) -> AppResult<Option<Movie>>;

    async fn get_movie_by_first_letter(&self, letter: &str) -> AppResult<Option<Movie>>;

    async fn get_movie_by_year(&self, year: i32) -> AppResult<Option<Movie>>;

    async fn create_movie(&self, input: &CreateMovie) -> AppResult<Movie>;

    /// Returns `None` when no movie has `input.id`.
    async fn patch_movie(&self, input: &PatchMovie) -> AppResult<Option<Movie>>;
}

/// [`MovieService`] backed by [`MovieRepo`] on a PostgreSQL pool.
pub struct PgMovieService {
    pool: DbPool,
}

impl PgMovieService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieService for PgMovieService {
    async fn get_all_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(MovieRepo::list(&self.pool).await?)
    }

    async fn get_movie_by_id(&self, id: DbId) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_movie_by_genre(&self, genre: &str) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_genre(&self.pool, genre).await?)
    }

    async fn get_movie_by_first_letter(&self, letter: &str) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_title_initial(&self.pool, letter).await?)
    }

    async fn get_movie_by_year(&self, year: i32) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_year(&self.pool, year).await?)
    }

    async fn create_movie(&self, input: &CreateMovie) -> AppResult<Movie> {
        Ok(MovieRepo::create(&self.pool, input).await?)
    }

    async fn patch_movie(&self, input: &PatchMovie) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::patch(&self.pool, input).await?)
    }
}
