pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;

mod dialect;
mod m20261018_create_transcript_tables;
pub mod schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261018_create_transcript_tables::Migration)]
    }
}

/// Drops and recreates the transcript tables without touching the migration history.
///
/// Any rows already in the three tables are discarded. Running this twice in a row
/// leaves the same schema as running it once.
pub async fn apply_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);
    schema::reset(&manager).await
}
