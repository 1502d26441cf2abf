mod config;
mod error;
pub mod store;

pub use config::{DEFAULT_MAX_CONNECTIONS, SqliteConfig};
pub use error::SqliteDaoError;
pub use store::SqliteGameStore;

use crate::dao::storage::StorageError;

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        match err.constraint_message() {
            Some(message) => StorageError::constraint(message),
            None => StorageError::unavailable(err.to_string(), err),
        }
    }
}
