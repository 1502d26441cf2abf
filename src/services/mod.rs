/// OpenAPI documentation generation.
pub mod documentation;
/// Board game CRUD operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
