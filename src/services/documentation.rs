use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the board game catalogue.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::list_games,
        crate::routes::game::add_game,
        crate::routes::game::game_detail,
        crate::routes::game::delete_game,
        crate::routes::game::edit_game,
        crate::routes::game::add_game_form,
        crate::routes::game::edit_game_form,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GameForm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "HTML pages and form actions for board games"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_game_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/", "/new", "/{id}", "/{id}/edit", "/healthcheck"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
