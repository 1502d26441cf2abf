use std::sync::Arc;

use boardgames::{
    dao::game_store::sqlite::{SqliteConfig, SqliteGameStore},
    state::{AppState, SharedState},
};
use tempfile::TempDir;

/// Fresh state backed by an SQLite file that lives as long as the returned [`TempDir`].
pub async fn create_test_state() -> (SharedState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("games.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let store = SqliteGameStore::connect(SqliteConfig::new(db_url))
        .await
        .expect("failed to create test database");

    (AppState::new(Arc::new(store)), temp_dir)
}
