use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::CafeRow;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub location: String,
}

/// Present the search form
pub async fn search_form() -> Html<String> {
    Html(views::search_form_page())
}

/// Find cafes whose location matches the submitted string exactly
///
/// Zero matches is a 404 with a structured error body; any match renders
/// the list view with exactly the matching records.
pub async fn search_cafes(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let cafes = db::cafes::find_by_location(&state.pool, &form.location).await?;
    if cafes.is_empty() {
        tracing::info!(location = %form.location, "no cafes at location");
        return Err(AppError::LocationNotFound);
    }

    let rows: Vec<CafeRow> = cafes.into_iter().map(CafeRow::from).collect();
    Ok(Html(views::cafes_page(&rows, None)))
}
