//! Repository for the `movies` table.

use cinerate_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieRow, PatchMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, genre, year_release, total_ratings, current_status, is_available";

/// Provides data access for movies.
///
/// The filtered lookups (genre, title initial, year) return the first
/// matching movie by id.
pub struct MovieRepo;

impl MovieRepo {
    /// List all movies ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let rows = sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// Find the first movie of a genre (case-insensitive).
    pub async fn find_by_genre(pool: &PgPool, genre: &str) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies WHERE lower(genre) = lower($1) ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(genre)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// Find the first movie whose title starts with the first character of
    /// `letter` (case-insensitive).
    pub async fn find_by_title_initial(
        pool: &PgPool,
        letter: &str,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE upper(left(title, 1)) = upper(left($1, 1))
             ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(letter)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// Find the first movie released in `year`.
    pub async fn find_by_year(pool: &PgPool, year: i32) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies WHERE year_release = $1 ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(year)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// Insert a new movie, returning the created row.
    ///
    /// Parameters: `$1 title, $2 genre, $3 year_release, $4 total_ratings,
    /// $5 current_status, $6 is_available`.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (title, genre, year_release, total_ratings, current_status, is_available)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.year_release)
            .bind(input.total_ratings)
            .bind(&input.current_status)
            .bind(input.is_available)
            .fetch_one(pool)
            .await?;
        Ok(Movie::from(row))
    }

    /// Patch a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Parameters: `$1 id` followed by the create order shifted by one.
    /// Returns `None` if no row with the given id exists.
    pub async fn patch(pool: &PgPool, input: &PatchMovie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                genre = COALESCE($3, genre),
                year_release = COALESCE($4, year_release),
                total_ratings = COALESCE($5, total_ratings),
                current_status = COALESCE($6, current_status),
                is_available = COALESCE($7, is_available)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.year_release)
            .bind(input.total_ratings)
            .bind(&input.current_status)
            .bind(input.is_available)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }
}
