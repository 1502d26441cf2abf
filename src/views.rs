//! Server-rendered HTML pages for the game catalogue.
//!
//! Every value coming from storage goes through [`escape`] before being interpolated.

use std::fmt::Write;

use axum::http::StatusCode;

use crate::dao::models::GameEntity;

/// Listing of every game with a link to its detail page.
pub fn game_listing(games: &[GameEntity]) -> String {
    let mut body = String::from("<h1>Board games</h1>\n<ul class=\"games\">\n");
    for game in games {
        let _ = writeln!(
            body,
            r#"  <li><a href="{url}">{title}</a></li>"#,
            url = game_url(game.id),
            title = escape(&game.title),
        );
    }
    body.push_str("</ul>\n<p><a href=\"/new\">Add a game</a></p>");

    layout("Board games", &body)
}

/// Detail page with links to edit or delete the game.
pub fn game_detail(game: &GameEntity) -> String {
    let title = escape(&game.title);
    let mut body = format!("<h1>{title}</h1>\n");

    if let Some(image_url) = game.image_url.as_deref().filter(|url| !url.is_empty()) {
        let _ = writeln!(
            body,
            r#"<img src="{}" alt="{title}">"#,
            escape(image_url)
        );
    }
    if let Some(description) = game.description.as_deref() {
        let _ = writeln!(body, "<p>{}</p>", escape(description));
    }

    let url = game_url(game.id);
    let _ = write!(
        body,
        r#"<p><a href="{url}/edit">Edit</a></p>
<form method="POST" action="{url}?_method=DELETE">
  <button type="submit">Delete</button>
</form>
<p><a href="/">Back to all games</a></p>"#
    );

    layout(&game.title, &body)
}

/// Empty form posting a new game to the listing URL.
pub fn game_add_form() -> String {
    let body = format!(
        "<h1>Add a game</h1>\n{}",
        game_form("/", None, "Add")
    );
    layout("Add a game", &body)
}

/// Form pre-filled with the game's fields, submitted as a PATCH through the method override.
pub fn game_edit_form(game: &GameEntity) -> String {
    let action = format!("{}?_method=PATCH", game_url(game.id));
    let body = format!(
        "<h1>Edit {}</h1>\n{}",
        escape(&game.title),
        game_form(&action, Some(game), "Save")
    );
    layout(&format!("Edit {}", game.title), &body)
}

/// Minimal page describing an HTTP error status.
pub fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {reason}</h1>\n<p><a href=\"/\">Back to all games</a></p>",
        status.as_u16()
    );
    layout(reason, &body)
}

/// Path of the detail page for a game.
pub fn game_url(id: i64) -> String {
    format!("/{id}")
}

fn game_form(action: &str, game: Option<&GameEntity>, submit: &str) -> String {
    let title = game.map(|g| escape(&g.title)).unwrap_or_default();
    let description = game
        .and_then(|g| g.description.as_deref())
        .map(escape)
        .unwrap_or_default();
    let image_url = game
        .and_then(|g| g.image_url.as_deref())
        .map(escape)
        .unwrap_or_default();

    format!(
        r#"<form method="POST" action="{action}">
  <label>Title <input name="title" value="{title}" required></label>
  <label>Description <textarea name="description">{description}</textarea></label>
  <label>Image URL <input name="imageUrl" value="{image_url}"></label>
  <button type="submit">{submit}</button>
</form>"#
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        escape(title)
    )
}

/// Escape text for use inside HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
