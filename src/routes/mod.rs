use axum::{Router, middleware};

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod method_override;

/// Compose all route trees and wire in the shared state.
///
/// The routes sit behind a fallback so the method override runs before they pick a handler.
pub fn router(state: SharedState) -> Router<()> {
    let routes = health::router()
        .merge(game::router())
        .merge(docs::router())
        .with_state(state);

    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(method_override::override_method))
}
