use crate::config::DatabaseConfig;
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Creates a connection to the configured transcript database
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(config.database_url()).await
}
