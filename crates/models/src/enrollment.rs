use crate::{course::CourseNumber, error::ValidationError};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Enrollments are only recorded for years after this one
pub const EARLIEST_YEAR_EXCLUSIVE: i16 = 2010;
/// Width of the fixed-length `term` column
pub const TERM_LEN: usize = 3;

pub fn is_valid_year(year: i16) -> bool {
    year > EARLIEST_YEAR_EXCLUSIVE
}

/// Marks are optional, and out of 100 when present
pub fn is_valid_final_mark(mark: Option<i16>) -> bool {
    mark.is_none_or(|mark| (0..=100).contains(&mark))
}

/// Where a student stands in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    /// A
    Active,
    /// W
    Withdrawn,
    /// E
    Excused,
}

impl EnrollmentStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Withdrawn, Self::Excused];

    /// The single character code stored in the `status` column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "A",
            Self::Withdrawn => "W",
            Self::Excused => "E",
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or_else(|| ValidationError::Status(code.to_owned()))
    }
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A three character term code such as `FAL` or `W24`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term(String);

impl Term {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Term {
    type Err = ValidationError;

    fn from_str(term: &str) -> Result<Self, Self::Err> {
        Self::try_from(term.to_owned())
    }
}

impl TryFrom<String> for Term {
    type Error = ValidationError;

    fn try_from(term: String) -> Result<Self, Self::Error> {
        if term.chars().count() == TERM_LEN {
            Ok(Self(term))
        } else {
            Err(ValidationError::Term(term))
        }
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A row of the student/course junction table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_number: CourseNumber,
    pub year: i16,
    pub term: Term,
    pub final_mark: Option<i16>,
    pub status: EnrollmentStatus,
}

impl NewEnrollment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_year(self.year) {
            return Err(ValidationError::Year(self.year));
        }
        if !is_valid_final_mark(self.final_mark) {
            return Err(ValidationError::FinalMark(
                self.final_mark.unwrap_or_default(),
            ));
        }
        Ok(())
    }
}
