use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Board game record persisted by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct GameEntity {
    /// Primary key, assigned by the database on insert.
    pub id: i64,
    /// Unique, non-empty display title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Link to an externally hosted image.
    #[sqlx(rename = "imageUrl")]
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Field values for a game that has not been stored yet, also used to overwrite an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFields {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl GameFields {
    /// Attach the identifier assigned by the store.
    pub fn into_entity(self, id: i64) -> GameEntity {
        GameEntity {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl From<GameEntity> for GameFields {
    fn from(entity: GameEntity) -> Self {
        Self {
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
        }
    }
}
