pub mod sqlite;

use crate::dao::models::{GameEntity, GameFields};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for board games.
///
/// Every write is committed before the returned future resolves.
pub trait GameStore: Send + Sync {
    /// Insert a new row and return it with its assigned id.
    fn insert_game(&self, fields: GameFields) -> BoxFuture<'static, StorageResult<GameEntity>>;
    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Overwrite every mutable column. Resolves to `false` when no row has that id.
    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<bool>>;
    /// Resolves to `false` when no row has that id.
    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
