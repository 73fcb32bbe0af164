use sea_orm::prelude::Decimal;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A transcript record that breaks one of the integrity rules of its table
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    GivenName(String),
    Surname(String),
    CourseNumber(String),
    CourseName(String),
    Credits(Decimal),
    Hours(i16),
    /// Hours and credits are individually valid but not as a pair
    CourseLoad { hours: i16, credits: Decimal },
    Cost(Decimal),
    Year(i16),
    Term(String),
    FinalMark(i16),
    Status(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::GivenName(name) => write!(
                f,
                "Given name {name:?} must start with two letters and be at most 50 characters"
            ),
            Self::Surname(name) => {
                write!(f, "Surname {name:?} must be between 2 and 50 characters")
            }
            Self::CourseNumber(number) => write!(
                f,
                "Course number {number:?} must be four letters, a hyphen and four digits"
            ),
            Self::CourseName(name) => {
                write!(f, "Course name {name:?} must be between 1 and 50 characters")
            }
            Self::Credits(credits) => write!(f, "Credits {credits} must be one of 3, 4.5 or 6"),
            Self::Hours(hours) => write!(f, "Hours {hours} must be one of 60, 90 or 120"),
            Self::CourseLoad { hours, credits } => write!(
                f,
                "{hours} hours cannot carry {credits} credits (60/90 hours take 3 or 4.5, 120 hours take 6)"
            ),
            Self::Cost(cost) => write!(f, "Cost {cost} must be between 400.00 and 1500.00"),
            Self::Year(year) => write!(f, "Year {year} must be after 2010"),
            Self::Term(term) => write!(f, "Term {term:?} must be exactly 3 characters"),
            Self::FinalMark(mark) => write!(f, "Final mark {mark} must be between 0 and 100"),
            Self::Status(status) => write!(f, "Status {status:?} must be one of A, W or E"),
        }
    }
}

impl std::error::Error for ValidationError {}
