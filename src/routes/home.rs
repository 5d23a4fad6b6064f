use axum::response::Html;

use crate::views;

/// Landing page
pub async fn home() -> Html<String> {
    Html(views::index_page())
}
