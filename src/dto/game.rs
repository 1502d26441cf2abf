use serde::Deserialize;
use utoipa::ToSchema;

/// Form fields submitted by the add and edit pages.
///
/// Every field is read as a plain string. An absent field stays `None`; an empty one is kept as-is.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GameForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Query string accepted by the method-override layer.
#[derive(Debug, Deserialize)]
pub struct MethodOverrideQuery {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keeps_empty_fields_and_leaves_missing_ones_unset() {
        let form: GameForm =
            parse_form("title=Chess&description=&imageUrl=chess.png");
        assert_eq!(form.title.as_deref(), Some("Chess"));
        assert_eq!(form.description.as_deref(), Some(""));
        assert_eq!(form.image_url.as_deref(), Some("chess.png"));

        let form: GameForm = parse_form("title=Go");
        assert_eq!(form.description, None);
        assert_eq!(form.image_url, None);
    }

    fn parse_form(body: &str) -> GameForm {
        let request = axum::http::Uri::builder()
            .path_and_query(format!("/?{body}"))
            .build()
            .unwrap();
        axum::extract::Query::<GameForm>::try_from_uri(&request)
            .unwrap()
            .0
    }
}
