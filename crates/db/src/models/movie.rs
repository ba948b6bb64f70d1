//! Movie entity model and DTOs.

use cinerate_core::types::{DbId, RatingCount};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw row from the `movies` table.
///
/// Only `id` and `title` are required; every other column may be missing
/// from the projection or NULL.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(default)]
    pub genre: Option<String>,
    #[sqlx(default)]
    pub year_release: Option<i32>,
    #[sqlx(default)]
    pub total_ratings: Option<RatingCount>,
    #[sqlx(default)]
    pub current_status: Option<String>,
    #[sqlx(default)]
    pub is_available: Option<bool>,
}

/// A movie as exposed to services and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub year_release: Option<i32>,
    pub total_ratings: RatingCount,
    pub current_status: Option<String>,
    pub is_available: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: row.genre,
            year_release: row.year_release,
            total_ratings: row.total_ratings.unwrap_or_default(),
            current_status: row.current_status,
            is_available: row.is_available.unwrap_or_default(),
        }
    }
}

/// DTO for creating a new movie. The id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    pub genre: Option<String>,
    pub year_release: Option<i32>,
    #[serde(default)]
    pub total_ratings: RatingCount,
    pub current_status: Option<String>,
    #[serde(default)]
    pub is_available: bool,
}

/// DTO for a partial update. Only non-`None` fields are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchMovie {
    pub id: DbId,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year_release: Option<i32>,
    pub total_ratings: Option<RatingCount>,
    pub current_status: Option<String>,
    pub is_available: Option<bool>,
}
