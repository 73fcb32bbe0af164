mod common;

use common::{course, enrollment, student};
use database::{
    config::{DatabaseConfig, IN_MEMORY},
    services::{
        course::CourseService, enrollment::EnrollmentService, student::StudentService,
    },
    setup,
};
use models::course::{Credits, Hours};
use sea_orm::{ConnectOptions, Database};
use std::time::Duration;

#[tokio::test]
async fn test_setup_rebuilds_schema_and_discards_rows() {
    let config = DatabaseConfig::new("sqlite:", IN_MEMORY).unwrap();
    let db = setup::run(&config).await.unwrap();

    let student_id = StudentService::create(&db, student("Ada", "Lovelace"))
        .await
        .unwrap();
    CourseService::create(&db, course("MATH-1234", Hours::Sixty, Credits::Three))
        .await
        .unwrap();
    EnrollmentService::create(&db, enrollment(student_id, "MATH-1234"))
        .await
        .unwrap();

    // Second run on the same database, dependents are dropped first
    migration::apply_schema(&db).await.unwrap();

    assert!(StudentService::list(&db).await.unwrap().is_empty());
    assert!(
        EnrollmentService::for_student(&db, student_id)
            .await
            .unwrap()
            .is_empty()
    );

    // The identity starts over with the table
    let restarted = StudentService::create(&db, student("Alan", "Turing"))
        .await
        .unwrap();
    assert_eq!(restarted, 2000);
}

#[tokio::test]
async fn test_ensure_database_creates_sqlite_file() {
    let dir = std::env::temp_dir().join(format!("transcripts-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let config = DatabaseConfig::new(format!("sqlite://{}", dir.display()), "setup_test").unwrap();
    let db = setup::run(&config).await.unwrap();
    db.close().await.unwrap();

    assert!(dir.join("setup_test.db").exists());

    // Running again against the existing file succeeds
    let db = setup::run(&config).await.unwrap();
    db.close().await.unwrap();

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_mysql_urls_have_a_driver() {
    let config = DatabaseConfig::new("mysql://root@127.0.0.1:9", "transcripts").unwrap();
    assert_eq!(config.database_url(), "mysql://root@127.0.0.1:9/transcripts");

    // Nothing listens on the discard port, so only the failure reason matters
    let mut options = ConnectOptions::new(config.database_url());
    options
        .max_connections(1)
        .connect_timeout(Duration::from_secs(1))
        .acquire_timeout(Duration::from_secs(1));

    let err = Database::connect(options).await.unwrap_err();
    assert!(!err.to_string().contains("no supporting driver"), "{err}");
}
