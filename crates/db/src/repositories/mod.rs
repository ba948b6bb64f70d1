//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access
//! methods that accept `&PgPool` as the first argument. Single-resource
//! reads return `Option`, absence is never encoded as a sentinel value.

pub mod movie_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
