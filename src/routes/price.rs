use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::db;
use crate::error::Result;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EditPriceParams {
    pub cafe_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceForm {
    pub id: i64,
    pub new_price: String,
}

/// Present the price edit form
///
/// A missing or unknown `cafe_id` is not an error; the form renders with
/// no cafe selected.
pub async fn edit_price_form(
    State(state): State<AppState>,
    Query(params): Query<EditPriceParams>,
) -> Result<Html<String>> {
    let cafe = match params.cafe_id {
        Some(id) => db::cafes::get_by_id(&state.pool, id).await?,
        None => None,
    };

    Ok(Html(views::edit_price_page(cafe.as_ref())))
}

/// Apply a new coffee price to an existing cafe
///
/// Fails with 404 if the id does not exist; otherwise redirects to the list.
pub async fn update_price(
    State(state): State<AppState>,
    Form(form): Form<UpdatePriceForm>,
) -> Result<Redirect> {
    db::cafes::update_price(&state.pool, form.id, &form.new_price).await?;
    tracing::info!(id = form.id, "coffee price updated");

    Ok(Redirect::to("/cafes"))
}
