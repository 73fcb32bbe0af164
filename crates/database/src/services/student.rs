use crate::{entities::student, error::TranscriptError};
use log::debug;
use models::student::{NewStudent, next_student_id};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    EntityTrait, QueryOrder, QuerySelect, TransactionTrait,
};

pub struct StudentService;

impl StudentService {
    /// Inserts a student and returns the key it was given
    ///
    /// Postgres generates the key itself. Engines without a stepped identity get the
    /// next key in the sequence, read and written in one transaction.
    pub async fn create(
        db: &DatabaseConnection,
        new_student: NewStudent,
    ) -> Result<i32, TranscriptError> {
        new_student.validate()?;

        let txn = db.begin().await?;

        let student_id = match txn.get_database_backend() {
            DbBackend::Postgres => NotSet,
            DbBackend::MySql | DbBackend::Sqlite => Set(Self::allocate_id(&txn).await?),
        };

        let NewStudent {
            given_name,
            surname,
            date_of_birth,
            enrolled,
        } = new_student;

        let student = student::ActiveModel {
            student_id,
            given_name: Set(given_name),
            surname: Set(surname),
            date_of_birth: Set(date_of_birth),
            // Unset falls through to the column default
            enrolled: enrolled.map_or(NotSet, Set),
        };

        let result = student::Entity::insert(student).exec(&txn).await?;
        txn.commit().await?;

        debug!("Inserted student {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    pub async fn find(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find_by_id(student_id).one(db).await
    }

    /// All students in key order, which is also insertion order
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .order_by_asc(student::Column::StudentId)
            .all(db)
            .await
    }

    async fn allocate_id(txn: &DatabaseTransaction) -> Result<i32, TranscriptError> {
        let last = student::Entity::find()
            .select_only()
            .column_as(student::Column::StudentId.max(), "last_id")
            .into_tuple::<Option<i32>>()
            .one(txn)
            .await?
            .flatten();

        next_student_id(last).ok_or(TranscriptError::KeysExhausted {
            last: last.unwrap_or_default(),
        })
    }
}
