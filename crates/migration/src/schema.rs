//! Table definitions for the transcript schema.
//!
//! Students and courses are independent, `student_courses` references both, so
//! tables are created in that order and dropped in the reverse one.

use crate::dialect;
use log::info;
use models::{
    course::{
        COURSE_NUMBER_GLOB, COURSE_NUMBER_REGEX, Credits, Hours, MAX_COURSE_NAME_LEN, cost_range,
    },
    enrollment::{EARLIEST_YEAR_EXCLUSIVE, EnrollmentStatus, TERM_LEN},
    student::{MAX_NAME_LEN, STUDENT_ID_SEED, STUDENT_ID_STEP},
};
use sea_orm_migration::{prelude::*, sea_orm::DbBackend};

/// Drops whichever of the three tables exist, dependents first
pub async fn drop_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .drop_table(
            Table::drop()
                .table(StudentCourses::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;

    manager
        .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
        .await?;

    manager
        .drop_table(Table::drop().table(Students::Table).if_exists().to_owned())
        .await?;

    Ok(())
}

/// Creates the three tables, referenced tables first
pub async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();

    manager.create_table(students(backend)).await?;
    manager.create_table(courses(backend)).await?;
    manager.create_table(student_courses()).await?;

    Ok(())
}

/// Drops and recreates the schema, discarding existing rows
pub async fn reset(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    info!("Dropping transcript tables");
    drop_tables(manager).await?;

    info!("Creating transcript tables");
    create_tables(manager).await
}

pub fn students(backend: DbBackend) -> TableCreateStatement {
    let mut student_id = ColumnDef::new(Students::StudentId);
    student_id.integer().not_null().primary_key();
    if let Some(identity) = dialect::stepped_identity(backend, STUDENT_ID_SEED, STUDENT_ID_STEP) {
        student_id.extra(identity);
    }

    Table::create()
        .table(Students::Table)
        .col(&mut student_id)
        .col(
            ColumnDef::new(Students::GivenName)
                .string_len(MAX_NAME_LEN as u32)
                .not_null()
                .check(
                    dialect::leading_letters(backend, Students::GivenName, 2)
                        .and(char_length(Students::GivenName).lte(MAX_NAME_LEN as i32)),
                ),
        )
        .col(
            ColumnDef::new(Students::Surname)
                .string_len(MAX_NAME_LEN as u32)
                .not_null()
                .check(char_length(Students::Surname).between(2, MAX_NAME_LEN as i32)),
        )
        .col(
            ColumnDef::new(Students::DateOfBirth)
                .date_time()
                .not_null(),
        )
        .col(
            ColumnDef::new(Students::Enrolled)
                .boolean()
                .not_null()
                .default(true),
        )
        // Hand-supplied keys must still land on the identity sequence
        .check(
            Expr::col(Students::StudentId).gte(STUDENT_ID_SEED).and(Expr::cust(format!(
                "({} - {STUDENT_ID_SEED}) % {STUDENT_ID_STEP} = 0",
                Students::StudentId.to_string()
            ))),
        )
        .to_owned()
}

pub fn courses(backend: DbBackend) -> TableCreateStatement {
    let costs = cost_range();

    Table::create()
        .table(Courses::Table)
        .col(
            ColumnDef::new(Courses::Number)
                .string_len(10)
                .not_null()
                .primary_key()
                .check(dialect::matches(
                    backend,
                    Courses::Number,
                    COURSE_NUMBER_GLOB,
                    COURSE_NUMBER_REGEX,
                )),
        )
        .col(
            ColumnDef::new(Courses::Name)
                .string_len(MAX_COURSE_NAME_LEN as u32)
                .not_null()
                .check(char_length(Courses::Name).between(1, MAX_COURSE_NAME_LEN as i32)),
        )
        .col(
            ColumnDef::new(Courses::Credits)
                .decimal_len(3, 1)
                .not_null()
                .check(Expr::col(Courses::Credits).is_in(Credits::ALL.map(Credits::as_decimal))),
        )
        .col(
            ColumnDef::new(Courses::Hours)
                .small_integer()
                .not_null()
                .check(Expr::col(Courses::Hours).is_in(Hours::ALL.map(Hours::as_i16))),
        )
        .col(ColumnDef::new(Courses::Active).boolean().not_null())
        .col(
            ColumnDef::new(Courses::Cost)
                .decimal_len(6, 2)
                .not_null()
                .check(Expr::col(Courses::Cost).between(*costs.start(), *costs.end())),
        )
        .check(course_load())
        .to_owned()
}

/// Character count of a text column; SQLite ignores declared lengths, so limits are checked
fn char_length<T: IntoColumnRef>(column: T) -> Expr {
    Expr::expr(Func::char_length(Expr::col(column)))
}

/// 60 and 90 hour courses carry 3 or 4.5 credits, 120 hour courses carry 6
fn course_load() -> SimpleExpr {
    let short = Expr::col(Courses::Hours)
        .is_in([Hours::Sixty.as_i16(), Hours::Ninety.as_i16()])
        .and(
            Expr::col(Courses::Credits)
                .is_in([Credits::Three.as_decimal(), Credits::FourAndHalf.as_decimal()]),
        );
    let long = Expr::col(Courses::Hours)
        .eq(Hours::OneHundredTwenty.as_i16())
        .and(Expr::col(Courses::Credits).eq(Credits::Six.as_decimal()));

    short.or(long)
}

pub fn student_courses() -> TableCreateStatement {
    Table::create()
        .table(StudentCourses::Table)
        .col(
            ColumnDef::new(StudentCourses::StudentId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(StudentCourses::CourseNumber)
                .string_len(10)
                .not_null(),
        )
        .col(
            ColumnDef::new(StudentCourses::Year)
                .small_integer()
                .not_null()
                .check(Expr::col(StudentCourses::Year).gt(EARLIEST_YEAR_EXCLUSIVE)),
        )
        .col(
            ColumnDef::new(StudentCourses::Term)
                .char_len(TERM_LEN as u32)
                .not_null()
                .check(char_length(StudentCourses::Term).eq(TERM_LEN as i32)),
        )
        // NULL passes the check, so ungraded rows are allowed
        .col(
            ColumnDef::new(StudentCourses::FinalMark)
                .small_integer()
                .null()
                .check(Expr::col(StudentCourses::FinalMark).between(0, 100)),
        )
        .col(
            ColumnDef::new(StudentCourses::Status)
                .char_len(1)
                .not_null()
                .check(
                    Expr::col(StudentCourses::Status)
                        .is_in(EnrollmentStatus::ALL.map(EnrollmentStatus::as_str)),
                ),
        )
        .primary_key(
            Index::create()
                .name("pk_student_courses")
                .col(StudentCourses::StudentId)
                .col(StudentCourses::CourseNumber),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_student_courses_student_id")
                .from(StudentCourses::Table, StudentCourses::StudentId)
                .to(Students::Table, Students::StudentId)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_student_courses_course_number")
                .from(StudentCourses::Table, StudentCourses::CourseNumber)
                .to(Courses::Table, Courses::Number)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

#[derive(Iden)]
pub enum Students {
    Table,
    StudentId,
    GivenName,
    Surname,
    DateOfBirth,
    Enrolled,
}

#[derive(Iden)]
pub enum Courses {
    Table,
    Number,
    Name,
    Credits,
    Hours,
    Active,
    Cost,
}

#[derive(Iden)]
pub enum StudentCourses {
    Table,
    StudentId,
    CourseNumber,
    Year,
    Term,
    FinalMark,
    Status,
}
