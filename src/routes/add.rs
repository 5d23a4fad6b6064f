use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::db;
use crate::error::Result;
use crate::models::NewCafe;
use crate::routes::validation::{checkbox_to_bool, validate_add_form};
use crate::views;
use crate::AppState;

/// Submitted add-form fields
///
/// Field names match the HTML form: `cafe` carries the cafe name, and the
/// checkbox keys (`toilet`, `wifi`, `sockets`, `calls`) are present only
/// when checked.
#[derive(Debug, Default, Deserialize)]
pub struct AddCafeForm {
    #[serde(default)]
    pub cafe: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seats: String,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub sockets: Option<String>,
    pub calls: Option<String>,
    #[serde(default)]
    pub coffee_price: String,
}

/// Present the empty add form
pub async fn add_cafe_form() -> Html<String> {
    Html(views::add_form_page(&AddCafeForm::default(), &[]))
}

/// Create a cafe from the submitted form
///
/// Invalid input re-presents the form unchanged with 422 and writes
/// nothing. A duplicate name surfaces as 409 Conflict.
pub async fn create_cafe(
    State(state): State<AppState>,
    Form(form): Form<AddCafeForm>,
) -> Result<Response> {
    let failed = validate_add_form(&form);
    if !failed.is_empty() {
        tracing::info!(fields = ?failed, "add form rejected");
        let page = views::add_form_page(&form, &failed);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    let cafe = NewCafe {
        name: form.cafe,
        map_url: form.map_url,
        img_url: form.img_url,
        location: form.location,
        seats: form.seats,
        has_toilet: checkbox_to_bool(&form.toilet),
        has_wifi: checkbox_to_bool(&form.wifi),
        has_sockets: checkbox_to_bool(&form.sockets),
        can_take_calls: checkbox_to_bool(&form.calls),
        coffee_price: if form.coffee_price.trim().is_empty() {
            None
        } else {
            Some(form.coffee_price)
        },
    };

    let id = db::cafes::insert(&state.pool, &cafe).await?;
    tracing::info!(id, name = %cafe.name, "cafe created");

    Ok(Redirect::to("/cafes").into_response())
}
