//! Shared types and domain errors for the Cinerate backend.

pub mod error;
pub mod types;
