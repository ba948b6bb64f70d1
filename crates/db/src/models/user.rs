//! User entity model and DTOs.

use cinerate_core::types::{DbId, RatingCount};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw row from the `users` table.
///
/// `total_ratings` may be absent from a projection or NULL; both map to `None`.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub full_name: String,
    pub handler: String,
    #[sqlx(default)]
    pub total_ratings: Option<RatingCount>,
}

/// A user as exposed to services and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub full_name: String,
    pub handler: String,
    pub total_ratings: RatingCount,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            handler: row.handler,
            total_ratings: row.total_ratings.unwrap_or_default(),
        }
    }
}

/// DTO for creating a new user. The id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub full_name: String,
    pub handler: String,
    #[serde(default)]
    pub total_ratings: RatingCount,
}

/// DTO for a partial update. Only non-`None` fields are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUser {
    pub id: DbId,
    pub full_name: Option<String>,
    pub handler: Option<String>,
    pub total_ratings: Option<RatingCount>,
}
