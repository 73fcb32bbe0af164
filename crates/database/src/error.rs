use models::error::ValidationError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Engine messages, Postgres and SQLite wording, for violations `DbErr::sql_err` does not classify
const CHECK_MARKERS: [&str; 2] = ["violates check constraint", "CHECK constraint failed"];
const NOT_NULL_MARKERS: [&str; 2] = ["violates not-null constraint", "NOT NULL constraint failed"];
const UNIQUE_MARKERS: [&str; 2] = ["duplicate key value", "UNIQUE constraint failed"];
const FOREIGN_KEY_MARKERS: [&str; 2] = [
    "violates foreign key constraint",
    "FOREIGN KEY constraint failed",
];

/// The kind of integrity rule a rejected statement broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Uniqueness,
    Referential,
    Domain,
    Nullability,
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Rejected before reaching the database
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
    #[error("uniqueness violation: {0}")]
    Uniqueness(String),
    #[error("referential violation: {0}")]
    Referential(String),
    #[error("domain violation: {0}")]
    Domain(String),
    #[error("nullability violation: {0}")]
    Nullability(String),
    /// The stepped student key would pass `i32::MAX`
    #[error("no student key follows {last}")]
    KeysExhausted { last: i32 },
    #[error(transparent)]
    Database(DbErr),
}

impl TranscriptError {
    /// Which rule was broken, whether it was caught in Rust or by the engine
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::Invalid(_) | Self::Domain(_) => Some(Violation::Domain),
            Self::Uniqueness(_) => Some(Violation::Uniqueness),
            Self::Referential(_) => Some(Violation::Referential),
            Self::Nullability(_) => Some(Violation::Nullability),
            Self::KeysExhausted { .. } | Self::Database(_) => None,
        }
    }
}

impl From<DbErr> for TranscriptError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => return Self::Uniqueness(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                return Self::Referential(message);
            }
            _ => {}
        }

        let message = err.to_string();
        let mentions = |markers: &[&str]| markers.iter().any(|marker| message.contains(marker));

        if mentions(&CHECK_MARKERS) {
            Self::Domain(message)
        } else if mentions(&NOT_NULL_MARKERS) {
            Self::Nullability(message)
        } else if mentions(&UNIQUE_MARKERS) {
            Self::Uniqueness(message)
        } else if mentions(&FOREIGN_KEY_MARKERS) {
            Self::Referential(message)
        } else {
            Self::Database(err)
        }
    }
}
