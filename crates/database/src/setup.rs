//! The schema setup procedure: make sure the database exists, connect to it and
//! rebuild the transcript tables.

use crate::{config::DatabaseConfig, db::create_connection};
use log::info;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};

/// Creates the configured database if it is missing and returns a connection to it
pub async fn ensure_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    match config.backend() {
        DbBackend::Postgres => {
            let server = Database::connect(config.server_url()).await?;
            let existing = server
                .query_one(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    "SELECT 1 FROM pg_database WHERE datname = $1",
                    [config.name().into()],
                ))
                .await?;

            if existing.is_none() {
                info!("Creating database {}", config.name());
                server
                    .execute_unprepared(&format!("CREATE DATABASE \"{}\"", config.name()))
                    .await?;
            }
            server.close().await?;
        }
        DbBackend::MySql => {
            let server = Database::connect(config.server_url()).await?;
            server
                .execute_unprepared(&format!("CREATE DATABASE IF NOT EXISTS `{}`", config.name()))
                .await?;
            server.close().await?;
        }
        // Connecting with mode=rwc creates the file
        DbBackend::Sqlite => {}
    }

    create_connection(config).await
}

/// Runs the whole setup procedure and hands back the ready connection
pub async fn run(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = ensure_database(config).await?;

    info!("Rebuilding transcript schema in {}", config.name());
    migration::apply_schema(&db).await?;

    Ok(db)
}
