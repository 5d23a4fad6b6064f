//! Cafe Directory Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod views;

pub use config::Config;
pub use error::{AppError, Result};

use axum::{routing::get, Router};
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

/// Build the application router. Shared by the binary and the tests.
pub fn app(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/", get(home))
        .route("/cafes", get(list_cafes))
        .route("/add", get(add_cafe_form).post(create_cafe))
        .route("/search", get(search_form).post(search_cafes))
        .route("/update-price", get(edit_price_form).post(update_price))
        .route(
            "/reports-closed/:cafe_id",
            get(report_closed).post(report_closed).delete(report_closed),
        )
        .route("/health", get(health_check))
        .with_state(state)
}
