//! Lets HTML forms, which can only send GET and POST, reach the DELETE and PATCH routes.

use axum::{
    extract::{Query, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::dto::game::MethodOverrideQuery;

/// Header consulted when the query string carries no `_method` parameter.
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Re-dispatch a `POST` as the verb named by `?_method=` or the override header.
///
/// Must wrap the router from the outside so the rewrite happens before method dispatch.
pub async fn override_method(mut request: Request, next: Next) -> Response {
    if request.method() == Method::POST {
        if let Some(method) = requested_method(&request) {
            debug!(%method, uri = %request.uri(), "overriding request method");
            *request.method_mut() = method;
        }
    }

    next.run(request).await
}

fn requested_method(request: &Request) -> Option<Method> {
    let from_query = Query::<MethodOverrideQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.method);
    let from_header = || {
        request
            .headers()
            .get(METHOD_OVERRIDE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    let raw = from_query.or_else(from_header)?;
    match raw.trim().to_ascii_uppercase().as_str() {
        "DELETE" => Some(Method::DELETE),
        "PATCH" => Some(Method::PATCH),
        "PUT" => Some(Method::PUT),
        _ => None,
    }
}
