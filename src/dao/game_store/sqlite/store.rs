use std::str::FromStr;

use futures::future::BoxFuture;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::debug;

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, GameFields},
    storage::StorageResult,
};

const GAME_TABLE_NAME: &str = "game";

const CREATE_GAME_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS game (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE CHECK (length(title) > 0),
    description TEXT,
    "imageUrl" TEXT
)
"#;

const SELECT_GAME_COLUMNS: &str = r#"SELECT id, title, description, "imageUrl" FROM game"#;

/// [`GameStore`] backed by a single SQLite table.
#[derive(Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Open the connection pool and create the `game` table when it is missing.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|source| SqliteDaoError::InvalidUrl {
                url: config.database_url.clone(),
                source,
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|source| SqliteDaoError::Connect {
                url: config.database_url.clone(),
                source,
            })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        debug!(url = %config.database_url, "SQLite game store ready");
        Ok(store)
    }

    async fn ensure_schema(&self) -> SqliteResult<()> {
        sqlx::query(CREATE_GAME_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::EnsureSchema {
                table: GAME_TABLE_NAME,
                source,
            })?;
        Ok(())
    }

    async fn insert_game(&self, fields: GameFields) -> SqliteResult<GameEntity> {
        let result = sqlx::query(r#"INSERT INTO game (title, description, "imageUrl") VALUES (?, ?, ?)"#)
            .bind(&fields.title)
            .bind(fields.description.as_deref())
            .bind(fields.image_url.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::InsertGame {
                title: fields.title.clone(),
                source,
            })?;

        Ok(fields.into_entity(result.last_insert_rowid()))
    }

    async fn find_game(&self, id: i64) -> SqliteResult<Option<GameEntity>> {
        sqlx::query_as::<_, GameEntity>(&format!("{SELECT_GAME_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::LoadGame { id, source })
    }

    async fn list_games(&self) -> SqliteResult<Vec<GameEntity>> {
        sqlx::query_as::<_, GameEntity>(&format!("{SELECT_GAME_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::ListGames { source })
    }

    async fn update_game(&self, game: GameEntity) -> SqliteResult<bool> {
        let id = game.id;
        let result =
            sqlx::query(r#"UPDATE game SET title = ?, description = ?, "imageUrl" = ? WHERE id = ?"#)
                .bind(game.title)
                .bind(game.description)
                .bind(game.image_url)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|source| SqliteDaoError::UpdateGame { id, source })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_game(&self, id: i64) -> SqliteResult<bool> {
        let result = sqlx::query("DELETE FROM game WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::DeleteGame { id, source })?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }
}

impl GameStore for SqliteGameStore {
    fn insert_game(&self, fields: GameFields) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(fields).await.map_err(Into::into) })
    }

    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.update_game(game).await.map_err(Into::into) })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_game(id).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
