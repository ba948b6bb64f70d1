//! Request handlers for users and movies.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding service in [`AppState`], turn an
//! absent result into a not-found error, and map failures via [`AppError`].
//!
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod movies;
pub mod users;
