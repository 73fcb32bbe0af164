use crate::{entities::student_course, error::TranscriptError};
use log::debug;
use models::{course::CourseNumber, enrollment::NewEnrollment};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Records a student taking a course and returns the enrollment's key
    pub async fn create(
        db: &DatabaseConnection,
        new_enrollment: NewEnrollment,
    ) -> Result<(i32, CourseNumber), TranscriptError> {
        new_enrollment.validate()?;

        let NewEnrollment {
            student_id,
            course_number,
            year,
            term,
            final_mark,
            status,
        } = new_enrollment;

        let enrollment = student_course::ActiveModel {
            student_id: Set(student_id),
            course_number: Set(course_number.to_string()),
            year: Set(year),
            term: Set(term.into()),
            final_mark: Set(final_mark),
            status: Set(status.as_str().to_owned()),
        };

        student_course::Entity::insert(enrollment).exec(db).await?;

        debug!("Enrolled student {student_id} in {course_number}");
        Ok((student_id, course_number))
    }

    pub async fn find(
        db: &DatabaseConnection,
        student_id: i32,
        course_number: &CourseNumber,
    ) -> Result<Option<student_course::Model>, DbErr> {
        student_course::Entity::find_by_id((student_id, course_number.to_string()))
            .one(db)
            .await
    }

    /// Every course a student has been enrolled in, oldest first
    pub async fn for_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Vec<student_course::Model>, DbErr> {
        student_course::Entity::find()
            .filter(student_course::Column::StudentId.eq(student_id))
            .order_by_asc(student_course::Column::Year)
            .order_by_asc(student_course::Column::Term)
            .order_by_asc(student_course::Column::CourseNumber)
            .all(db)
            .await
    }
}
