mod common;

use common::{date, student, transcript_db};
use database::{
    entities::student as students,
    error::{TranscriptError, Violation},
    services::student::StudentService,
};
use models::{error::ValidationError, student::is_valid_student_id};
use sea_orm::{ActiveValue::Set, EntityTrait};

#[tokio::test]
async fn test_student_ids_step_by_five_from_2000() {
    let db = transcript_db().await;

    let mut ids = Vec::new();
    for (given_name, surname) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper")] {
        ids.push(
            StudentService::create(&db, student(given_name, surname))
                .await
                .unwrap(),
        );
    }

    assert_eq!(ids, vec![2000, 2005, 2010]);

    let listed: Vec<i32> = StudentService::list(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.student_id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_enrolled_defaults_to_true() {
    let db = transcript_db().await;

    let defaulted = StudentService::create(&db, student("Ada", "Lovelace"))
        .await
        .unwrap();
    let explicit = StudentService::create(&db, student("Alan", "Turing").with_enrolled(false))
        .await
        .unwrap();

    let defaulted = StudentService::find(&db, defaulted).await.unwrap().unwrap();
    let explicit = StudentService::find(&db, explicit).await.unwrap().unwrap();

    assert!(defaulted.enrolled);
    assert!(!explicit.enrolled);
    assert_eq!(defaulted.given_name, "Ada");
    assert_eq!(defaulted.date_of_birth, date(2003, 5, 17));
}

#[tokio::test]
async fn test_invalid_names_are_rejected_before_insert() {
    let db = transcript_db().await;

    let err = StudentService::create(&db, student("1a", "Smith"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TranscriptError::Invalid(ValidationError::GivenName(_))
    ));
    assert_eq!(err.violation(), Some(Violation::Domain));

    let err = StudentService::create(&db, student("Sam", "X"))
        .await
        .unwrap_err();
    assert_eq!(err.violation(), Some(Violation::Domain));

    assert!(StudentService::list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_engine_rejects_bad_names() {
    let db = transcript_db().await;

    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set("1a".into()),
        surname: Set("Smith".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Domain));

    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set("Sam".into()),
        surname: Set("X".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Domain));
}

#[tokio::test]
async fn test_engine_rejects_keys_off_the_sequence() {
    let db = transcript_db().await;
    assert!(!is_valid_student_id(2003));

    let row = students::ActiveModel {
        student_id: Set(2003),
        given_name: Set("Sam".into()),
        surname: Set("Smith".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Domain));
}

#[tokio::test]
async fn test_missing_date_of_birth_is_a_nullability_violation() {
    let db = transcript_db().await;

    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set("Sam".into()),
        surname: Set("Smith".into()),
        ..Default::default()
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Nullability));
}

#[tokio::test]
async fn test_duplicate_student_id_is_a_uniqueness_violation() {
    let db = transcript_db().await;
    let id = StudentService::create(&db, student("Ada", "Lovelace"))
        .await
        .unwrap();

    let row = students::ActiveModel {
        student_id: Set(id),
        given_name: Set("Sam".into()),
        surname: Set("Smith".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Uniqueness));
}

#[tokio::test]
async fn test_engine_rejects_overlong_names() {
    let db = transcript_db().await;
    let long = "a".repeat(80);

    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set(long.clone()),
        surname: Set("Smith".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Domain));

    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set("Sam".into()),
        surname: Set(long),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    let err = TranscriptError::from(students::Entity::insert(row).exec(&db).await.unwrap_err());
    assert_eq!(err.violation(), Some(Violation::Domain));

    // Fifty characters is still allowed
    let row = students::ActiveModel {
        student_id: Set(2000),
        given_name: Set("a".repeat(50)),
        surname: Set("b".repeat(50)),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    students::Entity::insert(row).exec(&db).await.unwrap();
}

#[tokio::test]
async fn test_key_space_exhaustion_is_reported() {
    let db = transcript_db().await;

    let last = students::ActiveModel {
        student_id: Set(2_147_483_645),
        given_name: Set("Sam".into()),
        surname: Set("Smith".into()),
        date_of_birth: Set(date(2001, 1, 1)),
        enrolled: Set(true),
    };
    students::Entity::insert(last).exec(&db).await.unwrap();

    let err = StudentService::create(&db, student("Ada", "Lovelace"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TranscriptError::KeysExhausted {
            last: 2_147_483_645
        }
    ));
    assert_eq!(err.violation(), None);
    assert_eq!(StudentService::list(&db).await.unwrap().len(), 1);
}
