use sea_orm::DbBackend;
use std::env::{self, VarError};
use thiserror::Error;

pub const SERVER_URL_VAR: &str = "DATABASE_SERVER_URL";
pub const NAME_VAR: &str = "DATABASE_NAME";
pub const DEFAULT_DATABASE_NAME: &str = "transcripts";
/// SQLite database name that keeps everything in memory
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error("unsupported database server url `{0}`")]
    UnsupportedServer(String),
    #[error("invalid database name `{0}`")]
    InvalidName(String),
}

/// Where the transcript database lives
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    server_url: String,
    name: String,
    backend: DbBackend,
}

impl DatabaseConfig {
    /// # Arguments
    /// * `server_url` - URL of the database server, without a database name
    /// * `name` - Name of the database to create and use
    pub fn new(server_url: impl Into<String>, name: impl Into<String>) -> Result<Self, ConfigError> {
        let server_url = server_url.into().trim_end_matches('/').to_owned();
        let name = name.into();
        let backend = backend_for(&server_url)?;

        let valid_name = (backend == DbBackend::Sqlite && name == IN_MEMORY)
            || (!name.is_empty()
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        if !valid_name {
            return Err(ConfigError::InvalidName(name));
        }

        Ok(Self {
            server_url,
            name,
            backend,
        })
    }

    /// Reads `DATABASE_SERVER_URL` and `DATABASE_NAME`, loading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let server_url = read_var(SERVER_URL_VAR)?.ok_or(ConfigError::Missing(SERVER_URL_VAR))?;
        let name = read_var(NAME_VAR)?.unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_owned());

        Self::new(server_url, name)
    }

    pub fn backend(&self) -> DbBackend {
        self.backend
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL of the transcript database itself
    pub fn database_url(&self) -> String {
        match self.backend {
            DbBackend::Sqlite if self.name == IN_MEMORY => "sqlite::memory:".to_owned(),
            DbBackend::Sqlite => format!("{}/{}.db?mode=rwc", self.server_url, self.name),
            DbBackend::Postgres | DbBackend::MySql => format!("{}/{}", self.server_url, self.name),
        }
    }
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
    }
}

fn backend_for(server_url: &str) -> Result<DbBackend, ConfigError> {
    let scheme = server_url.split_once(':').map(|(scheme, _)| scheme);

    match scheme {
        Some("postgres" | "postgresql") => Ok(DbBackend::Postgres),
        Some("mysql") => Ok(DbBackend::MySql),
        Some("sqlite") => Ok(DbBackend::Sqlite),
        _ => Err(ConfigError::UnsupportedServer(server_url.to_owned())),
    }
}
