//! Create, read, update and delete operations for board games.
//!
//! Every write is committed by the store before these functions return.

use tracing::info;

use crate::{
    dao::models::{GameEntity, GameFields},
    error::ServiceError,
    state::SharedState,
};

/// Persist a new game and return it with its assigned id.
///
/// Fails with [`ServiceError::ConstraintViolation`] when the title is missing, empty or already taken.
pub async fn add(
    state: &SharedState,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<GameEntity, ServiceError> {
    let fields = GameFields {
        title: require_title(title)?,
        description,
        image_url,
    };

    let game = state.game_store().insert_game(fields).await?;
    info!(id = game.id, title = %game.title, "game added");
    Ok(game)
}

/// Fetch a single game.
pub async fn get_by_id(state: &SharedState, id: i64) -> Result<GameEntity, ServiceError> {
    state
        .game_store()
        .find_game(id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Return every stored game. The order is not guaranteed.
pub async fn list_all(state: &SharedState) -> Result<Vec<GameEntity>, ServiceError> {
    Ok(state.game_store().list_games().await?)
}

/// Overwrite the title, description and image URL of `game`.
pub async fn edit(
    state: &SharedState,
    game: GameEntity,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<GameEntity, ServiceError> {
    let updated = GameFields {
        title: require_title(title)?,
        description,
        image_url,
    }
    .into_entity(game.id);

    if !state.game_store().update_game(updated.clone()).await? {
        return Err(not_found(game.id));
    }

    info!(id = updated.id, title = %updated.title, "game edited");
    Ok(updated)
}

/// Delete `game` from storage.
pub async fn remove(state: &SharedState, game: GameEntity) -> Result<(), ServiceError> {
    if !state.game_store().delete_game(game.id).await? {
        return Err(not_found(game.id));
    }

    info!(id = game.id, title = %game.title, "game removed");
    Ok(())
}

fn require_title(title: Option<String>) -> Result<String, ServiceError> {
    title.ok_or_else(|| ServiceError::ConstraintViolation("game title is required".into()))
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}
