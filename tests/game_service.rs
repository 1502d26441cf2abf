//! Repository behaviour of the game service against a real SQLite file.

mod common;

use std::collections::HashSet;

use boardgames::{error::ServiceError, services::game_service};
use common::create_test_state;

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[tokio::test]
async fn added_game_reads_back_identically() {
    let (state, _temp_dir) = create_test_state().await;

    let game = game_service::add(
        &state,
        some("Chess"),
        some("Classic strategy"),
        some("chess.png"),
    )
    .await
    .unwrap();
    assert_eq!(game.id, 1);

    let fetched = game_service::get_by_id(&state, game.id).await.unwrap();
    assert_eq!(fetched, game);
    assert_eq!(fetched.title, "Chess");
    assert_eq!(fetched.description.as_deref(), Some("Classic strategy"));
    assert_eq!(fetched.image_url.as_deref(), Some("chess.png"));
}

#[tokio::test]
async fn optional_fields_may_be_absent() {
    let (state, _temp_dir) = create_test_state().await;

    let game = game_service::add(&state, some("Go"), None, None).await.unwrap();
    let fetched = game_service::get_by_id(&state, game.id).await.unwrap();
    assert_eq!(fetched.description, None);
    assert_eq!(fetched.image_url, None);
}

#[tokio::test]
async fn duplicate_title_is_a_constraint_violation() {
    let (state, _temp_dir) = create_test_state().await;

    game_service::add(&state, some("Catan"), None, None).await.unwrap();
    let result = game_service::add(&state, some("Catan"), some("again"), None).await;

    match result {
        Err(ServiceError::ConstraintViolation(_)) => {}
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }
    assert_eq!(game_service::list_all(&state).await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_or_empty_title_is_a_constraint_violation() {
    let (state, _temp_dir) = create_test_state().await;

    assert!(matches!(
        game_service::add(&state, None, some("no title"), None).await,
        Err(ServiceError::ConstraintViolation(_))
    ));
    assert!(matches!(
        game_service::add(&state, some(""), None, None).await,
        Err(ServiceError::ConstraintViolation(_))
    ));
    assert!(game_service::list_all(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (state, _temp_dir) = create_test_state().await;

    assert!(matches!(
        game_service::get_by_id(&state, 42).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn edit_overwrites_every_field_and_keeps_the_id() {
    let (state, _temp_dir) = create_test_state().await;

    let game = game_service::add(&state, some("Risk"), some("World war"), some("risk.png"))
        .await
        .unwrap();
    let id = game.id;

    game_service::edit(&state, game, some("Risk Legacy"), None, some("legacy.png"))
        .await
        .unwrap();

    let fetched = game_service::get_by_id(&state, id).await.unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.title, "Risk Legacy");
    assert_eq!(fetched.description, None);
    assert_eq!(fetched.image_url.as_deref(), Some("legacy.png"));
}

#[tokio::test]
async fn edit_to_an_existing_title_is_rejected() {
    let (state, _temp_dir) = create_test_state().await;

    game_service::add(&state, some("Chess"), None, None).await.unwrap();
    let go = game_service::add(&state, some("Go"), None, None).await.unwrap();
    let id = go.id;

    assert!(matches!(
        game_service::edit(&state, go, some("Chess"), None, None).await,
        Err(ServiceError::ConstraintViolation(_))
    ));
    assert_eq!(game_service::get_by_id(&state, id).await.unwrap().title, "Go");
}

#[tokio::test]
async fn removed_game_is_gone() {
    let (state, _temp_dir) = create_test_state().await;

    let game = game_service::add(&state, some("Chess"), None, None).await.unwrap();
    let id = game.id;
    game_service::remove(&state, game.clone()).await.unwrap();

    assert!(matches!(
        game_service::get_by_id(&state, id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        game_service::remove(&state, game).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn list_all_returns_each_added_game_once() {
    let (state, _temp_dir) = create_test_state().await;

    let titles = ["Chess", "Go", "Catan", "Carcassonne", "Azul"];
    let mut ids = HashSet::new();
    for title in titles {
        ids.insert(game_service::add(&state, some(title), None, None).await.unwrap().id);
    }

    let games = game_service::list_all(&state).await.unwrap();
    assert_eq!(games.len(), titles.len());

    let listed: HashSet<i64> = games.iter().map(|game| game.id).collect();
    assert_eq!(listed, ids);
    let listed_titles: HashSet<&str> = games.iter().map(|game| game.title.as_str()).collect();
    assert_eq!(listed_titles, titles.into_iter().collect());
}

#[tokio::test]
async fn ids_are_not_reused_after_removal() {
    let (state, _temp_dir) = create_test_state().await;

    let first = game_service::add(&state, some("Chess"), None, None).await.unwrap();
    let first_id = first.id;
    game_service::remove(&state, first).await.unwrap();

    let second = game_service::add(&state, some("Go"), None, None).await.unwrap();
    assert_ne!(second.id, first_id);
}
