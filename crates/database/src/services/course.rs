use crate::{entities::course, error::TranscriptError};
use log::debug;
use models::course::{CourseNumber, NewCourse};
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};

pub struct CourseService;

impl CourseService {
    /// Inserts a course and returns its number
    pub async fn create(
        db: &DatabaseConnection,
        new_course: NewCourse,
    ) -> Result<CourseNumber, TranscriptError> {
        new_course.validate()?;

        let course = course::ActiveModel {
            number: Set(new_course.number.to_string()),
            name: Set(new_course.name),
            credits: Set(new_course.credits.as_decimal()),
            hours: Set(new_course.hours.as_i16()),
            active: Set(new_course.active),
            cost: Set(new_course.cost),
        };

        course::Entity::insert(course).exec(db).await?;

        debug!("Inserted course {}", new_course.number);
        Ok(new_course.number)
    }

    pub async fn find(
        db: &DatabaseConnection,
        number: &CourseNumber,
    ) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(number.as_str()).one(db).await
    }
}
