use crate::error::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The first key handed out by the students identity
pub const STUDENT_ID_SEED: i32 = 2000;
/// Distance between consecutive student keys
pub const STUDENT_ID_STEP: i32 = 5;
/// Longest given name or surname the schema stores
pub const MAX_NAME_LEN: usize = 50;

/// Whether `id` is a key the students identity could have produced
pub fn is_valid_student_id(id: i32) -> bool {
    id >= STUDENT_ID_SEED && (id - STUDENT_ID_SEED) % STUDENT_ID_STEP == 0
}

/// The key that follows `last`, the seed for an empty table, or `None` once the
/// key space is used up
pub fn next_student_id(last: Option<i32>) -> Option<i32> {
    match last {
        Some(id) => id.checked_add(STUDENT_ID_STEP),
        None => Some(STUDENT_ID_SEED),
    }
}

/// Given names start with two ASCII letters
pub fn is_valid_given_name(name: &str) -> bool {
    let mut chars = name.chars();
    name.chars().count() <= MAX_NAME_LEN
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Surnames need at least two characters of any kind
pub fn is_valid_surname(name: &str) -> bool {
    (2..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// A student row before the database assigns its key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub given_name: String,
    pub surname: String,
    pub date_of_birth: NaiveDateTime,
    /// Left to the column default (enrolled) when `None`
    pub enrolled: Option<bool>,
}

impl NewStudent {
    pub fn new(
        given_name: impl Into<String>,
        surname: impl Into<String>,
        date_of_birth: NaiveDateTime,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            date_of_birth,
            enrolled: None,
        }
    }

    pub fn with_enrolled(mut self, enrolled: bool) -> Self {
        self.enrolled = Some(enrolled);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_given_name(&self.given_name) {
            return Err(ValidationError::GivenName(self.given_name.clone()));
        }
        if !is_valid_surname(&self.surname) {
            return Err(ValidationError::Surname(self.surname.clone()));
        }
        Ok(())
    }
}
