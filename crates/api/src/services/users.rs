use async_trait::async_trait;
use cinerate_core::types::{DbId, RatingCount};
use cinerate_db::models::user::{CreateUser, PatchUser, User};
use cinerate_db::repositories::UserRepo;
use cinerate_db::DbPool;

use crate::error::AppResult;

/// User operations exposed to the `/users` handlers.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    async fn get_user_by_id(&self, id: DbId) -> AppResult<Option<User>>;

    async fn get_user_by_ratings(&self, total_ratings: RatingCount) -> AppResult<Option<User>>;

    async fn create_user(&self, input: &CreateUser) -> AppResult<User>;

    /// Returns `None` when no user has `input.id`.
    async fn patch_user(&self, input: &PatchUser) -> AppResult<Option<User>>;
}

/// [`UserService`] backed by [`UserRepo`] on a PostgreSQL pool.
pub struct PgUserService {
    pool: DbPool,
}

impl PgUserService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserService for PgUserService {
    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool).await?)
    }

    async fn get_user_by_id(&self, id: DbId) -> AppResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_user_by_ratings(&self, total_ratings: RatingCount) -> AppResult<Option<User>> {
        Ok(UserRepo::find_by_total_ratings(&self.pool, total_ratings).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> AppResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn patch_user(&self, input: &PatchUser) -> AppResult<Option<User>> {
        Ok(UserRepo::patch(&self.pool, input).await?)
    }
}
