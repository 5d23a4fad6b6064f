use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::db;
use crate::error::Result;
use crate::models::CafeRow;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// One-shot banner carried over the delete redirect
    pub notice: Option<String>,
}

/// List every cafe, ordered by name
pub async fn list_cafes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>> {
    let cafes = db::cafes::list_all(&state.pool).await?;
    let rows: Vec<CafeRow> = cafes.into_iter().map(CafeRow::from).collect();

    Ok(Html(views::cafes_page(&rows, params.notice.as_deref())))
}
