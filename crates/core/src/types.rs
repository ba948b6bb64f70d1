/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Rating counters are stored as PostgreSQL INTEGER.
pub type RatingCount = i32;
