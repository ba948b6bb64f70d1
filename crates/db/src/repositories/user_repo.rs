//! Repository for the `users` table.

use cinerate_core::types::{DbId, RatingCount};
use sqlx::PgPool;

use crate::models::user::{CreateUser, PatchUser, User, UserRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, handler, total_ratings";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        let rows = sqlx::query_as::<_, UserRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(User::from))
    }

    /// Find the first user (lowest id) with exactly `total_ratings` ratings.
    pub async fn find_by_total_ratings(
        pool: &PgPool,
        total_ratings: RatingCount,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE total_ratings = $1 ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(total_ratings)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(User::from))
    }

    /// Insert a new user, returning the created row.
    ///
    /// Parameters: `$1 full_name, $2 handler, $3 total_ratings`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (full_name, handler, total_ratings)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(&input.full_name)
            .bind(&input.handler)
            .bind(input.total_ratings)
            .fetch_one(pool)
            .await?;
        Ok(User::from(row))
    }

    /// Patch a user. Only non-`None` fields in `input` are applied.
    ///
    /// Parameters: `$1 id, $2 full_name, $3 handler, $4 total_ratings`.
    /// Returns `None` if no row with the given id exists.
    pub async fn patch(pool: &PgPool, input: &PatchUser) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                full_name = COALESCE($2, full_name),
                handler = COALESCE($3, handler),
                total_ratings = COALESCE($4, total_ratings)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(input.id)
            .bind(&input.full_name)
            .bind(&input.handler)
            .bind(input.total_ratings)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(User::from))
    }
}
