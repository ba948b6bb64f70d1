//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database columns
//! - A `Serialize` domain struct built from the row by a pure `From` impl
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` patch DTO (id plus `Option` fields) for partial updates

pub mod movie;
pub mod user;
