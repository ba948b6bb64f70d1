//! Service layer.
//!
//! Services sit between the HTTP handlers and the repositories. They add no
//! rules of their own: each method invokes one repository function and hands
//! its result back unchanged, including `None` for absent rows. The traits
//! are the seam where handlers can be driven by stub implementations.

pub mod movies;
pub mod users;

pub use movies::{MovieService, PgMovieService};
pub use users::{PgUserService, UserService};
