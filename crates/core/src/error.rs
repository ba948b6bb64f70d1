use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {field} {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for a lookup keyed by the entity's id.
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::not_found_by(entity, "id", id)
    }

    /// Not-found error for a lookup keyed by any other column.
    pub fn not_found_by(entity: &'static str, field: &'static str, value: impl Display) -> Self {
        CoreError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}
