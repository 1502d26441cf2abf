use axum::{
    Form, Router,
    extract::{Path, State, rejection::PathRejection},
    response::{Html, Redirect},
    routing::get,
};
use tracing::debug;

use crate::{
    dto::game::GameForm, error::AppError, services::game_service, state::SharedState, views,
};

/// Routes for listing, viewing, creating, editing and deleting games.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_games).post(add_game))
        .route("/new", get(add_game_form))
        .route(
            "/{id}",
            get(game_detail).delete(delete_game).patch(edit_game),
        )
        .route("/{id}/edit", get(edit_game_form))
}

/// Only integer ids address a game; anything else is a missing page rather than a bad request.
fn game_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!(error = %rejection, "non-numeric game id");
            Err(AppError::NotFound("no such game".into()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "games",
    responses((status = 200, description = "Listing of every game", content_type = "text/html", body = String))
)]
/// Show the listing of games.
pub async fn list_games(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let games = game_service::list_all(&state).await?;
    Ok(Html(views::game_listing(&games)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "games",
    request_body(content = GameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Game added; redirects to its detail page"),
        (status = 500, description = "Missing, empty or duplicate title", content_type = "text/html", body = String)
    )
)]
/// Add a new game and redirect to its detail page.
pub async fn add_game(
    State(state): State<SharedState>,
    Form(form): Form<GameForm>,
) -> Result<Redirect, AppError> {
    let game = game_service::add(&state, form.title, form.description, form.image_url).await?;
    Ok(Redirect::to(&views::game_url(game.id)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game detail", content_type = "text/html", body = String),
        (status = 404, description = "Unknown game", content_type = "text/html", body = String)
    )
)]
/// Show the detail of a single game.
pub async fn game_detail(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let game = game_service::get_by_id(&state, game_id(path)?).await?;
    Ok(Html(views::game_detail(&game)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 303, description = "Game deleted; redirects to the listing"),
        (status = 404, description = "Unknown game", content_type = "text/html", body = String)
    )
)]
/// Delete a game and redirect to the listing.
pub async fn delete_game(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, AppError> {
    let game = game_service::get_by_id(&state, game_id(path)?).await?;
    game_service::remove(&state, game).await?;
    Ok(Redirect::to("/"))
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    request_body(content = GameForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Game updated; redirects to its detail page"),
        (status = 404, description = "Unknown game", content_type = "text/html", body = String)
    )
)]
/// Overwrite a game's fields and redirect to its detail page.
pub async fn edit_game(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
    Form(form): Form<GameForm>,
) -> Result<Redirect, AppError> {
    let game = game_service::get_by_id(&state, game_id(path)?).await?;
    let game =
        game_service::edit(&state, game, form.title, form.description, form.image_url).await?;
    Ok(Redirect::to(&views::game_url(game.id)))
}

#[utoipa::path(
    get,
    path = "/new",
    tag = "games",
    responses((status = 200, description = "Form for adding a game", content_type = "text/html", body = String))
)]
/// Show the form for adding a game.
pub async fn add_game_form() -> Html<String> {
    Html(views::game_add_form())
}

#[utoipa::path(
    get,
    path = "/{id}/edit",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Form for editing the game", content_type = "text/html", body = String),
        (status = 404, description = "Unknown game", content_type = "text/html", body = String)
    )
)]
/// Show the form for editing a game.
pub async fn edit_game_form(
    State(state): State<SharedState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let game = game_service::get_by_id(&state, game_id(path)?).await?;
    Ok(Html(views::game_edit_form(&game)))
}
