use crate::error::ValidationError;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::RangeInclusive,
    str::FromStr,
};

/// Longest course name the schema stores
pub const MAX_COURSE_NAME_LEN: usize = 50;

/// Glob accepted by SQLite for a course number
pub const COURSE_NUMBER_GLOB: &str = "[A-Za-z][A-Za-z][A-Za-z][A-Za-z]-[0-9][0-9][0-9][0-9]";
/// Regular expression accepted by Postgres and MySQL for a course number
pub const COURSE_NUMBER_REGEX: &str = "^[A-Za-z]{4}-[0-9]{4}$";

/// Whether `number` is four letters, a hyphen and four digits (e.g. `MATH-1234`)
pub fn is_valid_course_number(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() == 9
        && bytes[..4].iter().all(u8::is_ascii_alphabetic)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// A course identifier that is known to match the course number pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseNumber(String);

impl CourseNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four letter department prefix
    pub fn department(&self) -> &str {
        &self.0[..4]
    }
}

impl FromStr for CourseNumber {
    type Err = ValidationError;

    fn from_str(number: &str) -> Result<Self, Self::Err> {
        if is_valid_course_number(number) {
            Ok(Self(number.to_owned()))
        } else {
            Err(ValidationError::CourseNumber(number.to_owned()))
        }
    }
}

impl TryFrom<String> for CourseNumber {
    type Error = ValidationError;

    fn try_from(number: String) -> Result<Self, Self::Error> {
        if is_valid_course_number(&number) {
            Ok(Self(number))
        } else {
            Err(ValidationError::CourseNumber(number))
        }
    }
}

impl From<CourseNumber> for String {
    fn from(number: CourseNumber) -> Self {
        number.0
    }
}

impl Display for CourseNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Credit weights a course may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Credits {
    Three,
    FourAndHalf,
    Six,
}

impl Credits {
    pub const ALL: [Self; 3] = [Self::Three, Self::FourAndHalf, Self::Six];

    /// The value stored in the one-decimal `credits` column
    pub fn as_decimal(self) -> Decimal {
        match self {
            Self::Three => Decimal::new(30, 1),
            Self::FourAndHalf => Decimal::new(45, 1),
            Self::Six => Decimal::new(60, 1),
        }
    }
}

impl TryFrom<Decimal> for Credits {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|credits| credits.as_decimal() == value)
            .ok_or(ValidationError::Credits(value))
    }
}

impl Display for Credits {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_decimal().normalize())
    }
}

/// Contact hours a course may run for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hours {
    Sixty,
    Ninety,
    OneHundredTwenty,
}

impl Hours {
    pub const ALL: [Self; 3] = [Self::Sixty, Self::Ninety, Self::OneHundredTwenty];

    pub fn as_i16(self) -> i16 {
        match self {
            Self::Sixty => 60,
            Self::Ninety => 90,
            Self::OneHundredTwenty => 120,
        }
    }
}

impl TryFrom<i16> for Hours {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|hours| hours.as_i16() == value)
            .ok_or(ValidationError::Hours(value))
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_i16())
    }
}

/// Shorter courses carry 3 or 4.5 credits, only 120 hour courses carry 6
pub fn credits_match_hours(hours: Hours, credits: Credits) -> bool {
    matches!(
        (hours, credits),
        (Hours::Sixty | Hours::Ninety, Credits::Three | Credits::FourAndHalf)
            | (Hours::OneHundredTwenty, Credits::Six)
    )
}

/// Inclusive bounds on what a course may cost
pub fn cost_range() -> RangeInclusive<Decimal> {
    Decimal::new(40000, 2)..=Decimal::new(150000, 2)
}

pub fn is_valid_cost(cost: Decimal) -> bool {
    cost_range().contains(&cost)
}

/// A course row as it will be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub number: CourseNumber,
    pub name: String,
    pub credits: Credits,
    pub hours: Hours,
    pub active: bool,
    pub cost: Decimal,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > MAX_COURSE_NAME_LEN {
            return Err(ValidationError::CourseName(self.name.clone()));
        }
        if !credits_match_hours(self.hours, self.credits) {
            return Err(ValidationError::CourseLoad {
                hours: self.hours.as_i16(),
                credits: self.credits.as_decimal(),
            });
        }
        if !is_valid_cost(self.cost) {
            return Err(ValidationError::Cost(self.cost));
        }
        Ok(())
    }
}
