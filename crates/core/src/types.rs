/// Primary keys are PostgreSQL BIGINT values taken from the CSV exports.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
