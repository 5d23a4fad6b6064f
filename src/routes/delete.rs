use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::constants::{NOTICE_CAFE_DELETED, NOTICE_CAFE_MISSING};
use crate::db;
use crate::error::{AppError, Result};
use crate::AppState;

/// Delete a cafe reported closed
///
/// Always redirects to the list; the outcome rides along as a `notice`
/// query parameter.
pub async fn report_closed(
    State(state): State<AppState>,
    Path(cafe_id): Path<i64>,
) -> Result<Redirect> {
    let notice = match db::cafes::delete(&state.pool, cafe_id).await {
        Ok(()) => {
            tracing::info!(cafe_id, "cafe deleted");
            NOTICE_CAFE_DELETED
        }
        Err(AppError::CafeNotFound) => {
            tracing::warn!(cafe_id, "delete attempt for unknown cafe");
            NOTICE_CAFE_MISSING
        }
        Err(e) => return Err(e),
    };

    Ok(Redirect::to(&format!(
        "/cafes?notice={}",
        urlencoding::encode(notice)
    )))
}
