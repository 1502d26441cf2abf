//! Error types shared by the SQLite storage implementation.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The connection string could not be parsed.
    #[error("failed to parse SQLite connection URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    /// Opening the connection pool failed.
    #[error("failed to open SQLite database `{url}`")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to ensure the `{table}` table exists")]
    EnsureSchema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to insert game `{title}`")]
    InsertGame {
        title: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to load game `{id}`")]
    LoadGame {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to list games")]
    ListGames {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to update game `{id}`")]
    UpdateGame {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to delete game `{id}`")]
    DeleteGame {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
    #[error("SQLite health check failed")]
    HealthPing {
        #[source]
        source: sqlx::Error,
    },
}

impl SqliteDaoError {
    fn source_error(&self) -> &sqlx::Error {
        match self {
            Self::InvalidUrl { source, .. }
            | Self::Connect { source, .. }
            | Self::EnsureSchema { source, .. }
            | Self::InsertGame { source, .. }
            | Self::LoadGame { source, .. }
            | Self::ListGames { source }
            | Self::UpdateGame { source, .. }
            | Self::DeleteGame { source, .. }
            | Self::HealthPing { source } => source,
        }
    }

    /// Database message when the failure is a uniqueness, not-null or check rule rejecting a write.
    pub fn constraint_message(&self) -> Option<String> {
        let sqlx::Error::Database(db_err) = self.source_error() else {
            return None;
        };

        match db_err.kind() {
            ErrorKind::UniqueViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                Some(format!("{self}: {}", db_err.message()))
            }
            _ => None,
        }
    }
}
