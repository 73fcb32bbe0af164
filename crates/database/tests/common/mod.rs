#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use database::{
    config::{DatabaseConfig, IN_MEMORY},
    setup,
};
use models::{
    course::{Credits, Hours, NewCourse},
    enrollment::{EnrollmentStatus, NewEnrollment},
    student::NewStudent,
};
use sea_orm::{DatabaseConnection, prelude::Decimal};

/// A fresh in-memory database with the transcript schema applied
pub async fn transcript_db() -> DatabaseConnection {
    let config = DatabaseConfig::new("sqlite:", IN_MEMORY).unwrap();
    setup::run(&config).await.unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn student(given_name: &str, surname: &str) -> NewStudent {
    NewStudent::new(given_name, surname, date(2003, 5, 17))
}

pub fn course(number: &str, hours: Hours, credits: Credits) -> NewCourse {
    NewCourse {
        number: number.parse().unwrap(),
        name: "Introductory Statistics".into(),
        credits,
        hours,
        active: true,
        cost: Decimal::new(75000, 2),
    }
}

pub fn enrollment(student_id: i32, course_number: &str) -> NewEnrollment {
    NewEnrollment {
        student_id,
        course_number: course_number.parse().unwrap(),
        year: 2024,
        term: "FAL".parse().unwrap(),
        final_mark: None,
        status: EnrollmentStatus::Active,
    }
}
