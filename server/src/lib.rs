//! HTTP service exposing an in-memory recipe collection.
//!
//! Build a router with [`app`] around a [`RecipeStore`]; each store is an
//! independent collection, so tests can run against their own instance.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;

use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub use config::Config;
pub use error::ApiError;
pub use models::{Recipe, RecipeDraft};
pub use store::RecipeStore;

/// Application state shared across all handlers
pub type AppState = Arc<RecipeStore>;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .merge(api::health::router())
        .nest("/recipes", api::recipes::router())
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(state);

    telemetry::with_request_tracing(router)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api::openapi())
}
